use rand::Rng;

use crate::modules::dto::{Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let mut rng = rand::thread_rng();

    let metrics = vec![
        Metric {
            label: "Entradas (Mês)".into(),
            value: format!("R$ {},00", rng.gen_range(25000..=35000)),
            delta: format!("+{}%", rng.gen_range(5..=10)),
        },
        Metric {
            label: "Saídas (Mês)".into(),
            value: format!("R$ {},00", rng.gen_range(18000..=25000)),
            delta: format!("+{}%", rng.gen_range(3..=7)),
        },
        Metric {
            label: "Lucro Líquido".into(),
            value: format!("R$ {},00", rng.gen_range(7000..=10000)),
            delta: format!("+{}%", rng.gen_range(8..=15)),
        },
        Metric {
            label: "Margem".into(),
            value: format!("{}%", rng.gen_range(25..=35)),
            delta: format!("+{}%", rng.gen_range(1..=3)),
        },
    ];

    let charts = vec![Chart {
        title: "Fluxo de Caixa - Últimos 30 Dias".into(),
        labels: (1..=30).map(|d| d.to_string()).collect(),
        series: vec![
            Series {
                name: "Entradas".into(),
                values: (0..30).map(|_| rng.gen_range(800..=2000)).collect(),
            },
            Series {
                name: "Saídas".into(),
                values: (0..30).map(|_| rng.gen_range(600..=1500)).collect(),
            },
        ],
    }];

    let tables = vec![Table {
        title: "Últimos Lançamentos".into(),
        columns: ["Descrição", "Tipo", "Valor"].map(String::from).to_vec(),
        rows: (1..=10)
            .map(|i| {
                let entrada = rng.gen_bool(0.5);
                vec![
                    format!("Lançamento {i}"),
                    if entrada { "Entrada" } else { "Saída" }.to_string(),
                    format!("R$ {},00", rng.gen_range(100..=2000)),
                ]
            })
            .collect(),
    }];

    ModuleSummary {
        id: "financeiro",
        name: "Sistema Financeiro",
        metrics,
        charts,
        tables,
    }
}
