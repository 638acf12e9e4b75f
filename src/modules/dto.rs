use serde::Serialize;

/// Dashboard card for one platform, as shown on the launcher grid.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleCard {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

/// Headline figure with its delta badge, e.g. ("Vendas Hoje", "R$ 2.450", "+8%").
#[derive(Debug, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct Chart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.map(String::from).to_vec()
}

/// One render of a platform screen. Regenerated from sample data on every
/// request; nothing here is persisted or shared between modules.
#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub metrics: Vec<Metric>,
    pub charts: Vec<Chart>,
    pub tables: Vec<Table>,
}
