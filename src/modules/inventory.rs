use crate::modules::dto::{row, Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let metrics = vec![
        Metric {
            label: "Total de Itens".into(),
            value: "1.456".into(),
            delta: "+45".into(),
        },
        Metric {
            label: "Valor em Estoque".into(),
            value: "R$ 87.234".into(),
            delta: "+R$ 5.321".into(),
        },
        Metric {
            label: "Categorias".into(),
            value: "23".into(),
            delta: "+2".into(),
        },
        Metric {
            label: "Fornecedores".into(),
            value: "15".into(),
            delta: "+1".into(),
        },
    ];

    let charts = vec![Chart {
        title: "Quantidade por Produto".into(),
        labels: ["Notebook", "Mouse", "Teclado", "Monitor", "Cadeira", "Mesa", "Caneta", "Papel"]
            .map(String::from)
            .to_vec(),
        series: vec![
            Series {
                name: "Quantidade".into(),
                values: vec![15, 42, 28, 12, 8, 5, 150, 80],
            },
            Series {
                name: "Mínimo".into(),
                values: vec![10, 30, 20, 10, 10, 5, 100, 100],
            },
        ],
    }];

    let tables = vec![
        Table {
            title: "Inventário".into(),
            columns: ["Código", "Produto", "Categoria", "Quantidade", "Valor Unit."]
                .map(String::from)
                .to_vec(),
            rows: vec![
                row(["P001", "Notebook", "Eletrônicos", "15", "R$ 3.500"]),
                row(["P002", "Mouse", "Eletrônicos", "42", "R$ 80"]),
                row(["P003", "Teclado", "Eletrônicos", "28", "R$ 150"]),
                row(["P004", "Monitor", "Eletrônicos", "12", "R$ 1.200"]),
                row(["P005", "Cadeira", "Móveis", "8", "R$ 450"]),
                row(["P006", "Mesa", "Móveis", "5", "R$ 350"]),
                row(["P007", "Caneta", "Papelaria", "150", "R$ 2"]),
                row(["P008", "Papel", "Papelaria", "80", "R$ 25"]),
            ],
        },
        Table {
            title: "Fornecedores".into(),
            columns: ["Código", "Nome", "Telefone", "Categoria"]
                .map(String::from)
                .to_vec(),
            rows: vec![
                row(["F001", "Fornecedor A", "(11) 3333-4444", "Eletrônicos"]),
                row(["F002", "Fornecedor B", "(11) 4444-5555", "Móveis"]),
                row(["F003", "Fornecedor C", "(11) 5555-6666", "Papelaria"]),
                row(["F004", "Fornecedor D", "(11) 6666-7777", "Eletrônicos"]),
                row(["F005", "Fornecedor E", "(11) 7777-8888", "Diversos"]),
            ],
        },
    ];

    ModuleSummary {
        id: "estoque",
        name: "Sistema de Estoque",
        metrics,
        charts,
        tables,
    }
}
