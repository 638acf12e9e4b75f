use crate::modules::dto::{row, Chart, Metric, ModuleSummary, Series, Table};

pub fn summary() -> ModuleSummary {
    let metrics = vec![
        Metric {
            label: "Total Agendamentos".into(),
            value: "8".into(),
            delta: "+2".into(),
        },
        Metric {
            label: "Confirmados".into(),
            value: "6".into(),
            delta: "-1".into(),
        },
        Metric {
            label: "Concluídos".into(),
            value: "3".into(),
            delta: "+1".into(),
        },
        Metric {
            label: "Faturamento".into(),
            value: "R$ 850".into(),
            delta: "+R$ 120".into(),
        },
    ];

    let charts = vec![Chart {
        title: "Agendamentos por Dia da Semana".into(),
        labels: ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]
            .map(String::from)
            .to_vec(),
        series: vec![Series {
            name: "Agendamentos".into(),
            values: vec![6, 8, 5, 9, 11, 7],
        }],
    }];

    let tables = vec![Table {
        title: "Agenda de Hoje".into(),
        columns: ["Horário", "Cliente", "Serviço", "Status"]
            .map(String::from)
            .to_vec(),
        rows: vec![
            row(["09:00", "Maria Santos", "Corte de Cabelo", "Confirmado"]),
            row(["10:00", "João Silva", "Barba", "Confirmado"]),
            row(["11:00", "Ana Souza", "Manicure", "Pendente"]),
            row(["14:00", "Carlos Oliveira", "Corte de Cabelo", "Confirmado"]),
            row(["15:30", "Pedro Lima", "Massagem", "Concluído"]),
        ],
    }];

    ModuleSummary {
        id: "agendamento",
        name: "Sistema de Agendamento",
        metrics,
        charts,
        tables,
    }
}
