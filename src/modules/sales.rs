use rand::Rng;

use crate::modules::dto::{row, Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let mut rng = rand::thread_rng();

    let metrics = vec![
        Metric {
            label: "Vendas Hoje".into(),
            value: format!("R$ {},00", rng.gen_range(1500..=3000)),
            delta: format!("+{}%", rng.gen_range(5..=15)),
        },
        Metric {
            label: "Vendas Mês".into(),
            value: format!("R$ {},00", rng.gen_range(45000..=60000)),
            delta: format!("+{}%", rng.gen_range(8..=12)),
        },
        Metric {
            label: "Ticket Médio".into(),
            value: format!("R$ {},00", rng.gen_range(80..=120)),
            delta: format!("+R$ {}", rng.gen_range(5..=15)),
        },
        Metric {
            label: "Meta Mensal".into(),
            value: "78%".into(),
            delta: "+5%".into(),
        },
    ];

    let charts = vec![
        Chart {
            title: "Vendas Diárias - Últimos 30 Dias".into(),
            labels: (1..=30).map(|d| d.to_string()).collect(),
            series: vec![Series {
                name: "Vendas".into(),
                values: (0..30).map(|_| rng.gen_range(800..=2500)).collect(),
            }],
        },
        Chart {
            title: "Distribuição por Categoria".into(),
            labels: ["Eletrônicos", "Vestuário", "Alimentos", "Serviços", "Outros"]
                .map(String::from)
                .to_vec(),
            series: vec![Series {
                name: "Percentual".into(),
                values: vec![35, 25, 20, 12, 8],
            }],
        },
    ];

    let tables = vec![Table {
        title: "Produtos Mais Vendidos".into(),
        columns: ["Produto", "Quantidade", "Faturamento"]
            .map(String::from)
            .to_vec(),
        rows: vec![
            row(["Produto A", "145", "R$ 7.250"]),
            row(["Produto B", "132", "R$ 6.600"]),
            row(["Produto C", "98", "R$ 4.900"]),
            row(["Produto D", "87", "R$ 4.350"]),
            row(["Produto E", "65", "R$ 3.250"]),
        ],
    }];

    ModuleSummary {
        id: "vendas",
        name: "Sistema de Vendas",
        metrics,
        charts,
        tables,
    }
}
