use crate::modules::dto::{row, Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let metrics = vec![
        Metric {
            label: "Total Funcionários".into(),
            value: "45".into(),
            delta: "+3".into(),
        },
        Metric {
            label: "Departamentos".into(),
            value: "8".into(),
            delta: "0".into(),
        },
        Metric {
            label: "Horas Trabalhadas".into(),
            value: "7.520".into(),
            delta: "+320".into(),
        },
        Metric {
            label: "Taxa de Absenteísmo".into(),
            value: "3.2%".into(),
            delta: "-0.5%".into(),
        },
    ];

    let charts = vec![Chart {
        title: "Funcionários por Departamento".into(),
        labels: ["TI", "RH", "Vendas", "Financeiro", "Marketing", "Operações"]
            .map(String::from)
            .to_vec(),
        series: vec![Series {
            name: "Funcionários".into(),
            values: vec![8, 5, 12, 6, 4, 10],
        }],
    }];

    let tables = vec![
        Table {
            title: "Funcionários".into(),
            columns: ["Matrícula", "Nome", "Cargo", "Departamento", "Salário", "Status"]
                .map(String::from)
                .to_vec(),
            rows: vec![
                row(["F001", "João Silva", "Analista", "TI", "R$ 4.500", "Ativo"]),
                row(["F002", "Maria Santos", "Coordenador", "RH", "R$ 6.800", "Ativo"]),
                row(["F003", "Carlos Oliveira", "Assistente", "Vendas", "R$ 2.800", "Ativo"]),
                row(["F004", "Ana Souza", "Gerente", "Financeiro", "R$ 9.500", "Ativo"]),
                row(["F005", "Pedro Lima", "Analista", "Marketing", "R$ 4.200", "Ativo"]),
            ],
        },
        Table {
            title: "Folha do Mês".into(),
            columns: ["Total Bruto", "Total Descontos", "Total Líquido"]
                .map(String::from)
                .to_vec(),
            rows: vec![row(["R$ 187.500", "R$ 32.800", "R$ 154.700"])],
        },
    ];

    ModuleSummary {
        id: "rh",
        name: "Sistema de RH",
        metrics,
        charts,
        tables,
    }
}
