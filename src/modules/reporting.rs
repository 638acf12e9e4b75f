use rand::Rng;

use crate::modules::dto::{Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let mut rng = rand::thread_rng();

    let metrics = vec![
        Metric {
            label: "Faturamento Mensal".into(),
            value: "R$ 78.450".into(),
            delta: "+12%".into(),
        },
        Metric {
            label: "Ticket Médio".into(),
            value: "R$ 94,50".into(),
            delta: "+R$ 5,20".into(),
        },
        Metric {
            label: "Conversão".into(),
            value: "68%".into(),
            delta: "+3%".into(),
        },
        Metric {
            label: "Satisfação Clientes".into(),
            value: "4.5/5".into(),
            delta: "+0.3".into(),
        },
        Metric {
            label: "ROI".into(),
            value: "18.5%".into(),
            delta: "+2.1%".into(),
        },
        Metric {
            label: "Margem Líquida".into(),
            value: "22.3%".into(),
            delta: "+1.2%".into(),
        },
    ];

    let charts = vec![Chart {
        title: "Vendas Consolidadas - Últimos 30 Dias".into(),
        labels: (1..=30).map(|d| d.to_string()).collect(),
        series: vec![Series {
            name: "Vendas".into(),
            values: (0..30).map(|_| rng.gen_range(1000..=5000)).collect(),
        }],
    }];

    let tables = vec![Table {
        title: "Relatórios Disponíveis".into(),
        columns: ["Relatório", "Registros", "Tamanho"].map(String::from).to_vec(),
        rows: [
            "Vendas por Período",
            "Fluxo de Caixa",
            "Folha de Pagamento",
            "Posição de Estoque",
        ]
        .iter()
        .map(|nome| {
            vec![
                nome.to_string(),
                rng.gen_range(100..=1000).to_string(),
                format!("{} MB", rng.gen_range(1..=10)),
            ]
        })
        .collect(),
    }];

    ModuleSummary {
        id: "relatorios",
        name: "Sistema de Relatórios",
        metrics,
        charts,
        tables,
    }
}
