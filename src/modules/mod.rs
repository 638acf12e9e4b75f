use crate::state::AppState;
use axum::{routing::get, Router};

pub mod dto;
pub mod handlers;

mod finance;
mod hr;
mod inventory;
mod reporting;
mod sales;
mod scheduling;

use dto::ModuleCard;

/// The launcher grid, in display order. Static by design: the cards carry
/// presentation copy only, all live-looking numbers come from the per-module
/// summaries.
pub const CATALOG: &[ModuleCard] = &[
    ModuleCard {
        id: "agendamento",
        name: "Sistema de Agendamento",
        icon: "📅",
        color: "#FF4B4B",
        description: "Gerencie agendamentos, clientes e serviços",
        stats: "45 agendamentos hoje",
    },
    ModuleCard {
        id: "vendas",
        name: "Sistema de Vendas",
        icon: "💰",
        color: "#00CC96",
        description: "Controle de vendas, produtos e clientes",
        stats: "R$ 2.450 em vendas hoje",
    },
    ModuleCard {
        id: "financeiro",
        name: "Sistema Financeiro",
        icon: "📊",
        color: "#FFA500",
        description: "Fluxo de caixa, contas e relatórios",
        stats: "Saldo: R$ 15.780",
    },
    ModuleCard {
        id: "rh",
        name: "Sistema de RH",
        icon: "👥",
        color: "#6C3483",
        description: "Gestão de funcionários e folha",
        stats: "45 funcionários ativos",
    },
    ModuleCard {
        id: "estoque",
        name: "Sistema de Estoque",
        icon: "📦",
        color: "#3498DB",
        description: "Controle de estoque e fornecedores",
        stats: "1.456 itens em estoque",
    },
    ModuleCard {
        id: "relatorios",
        name: "Sistema de Relatórios",
        icon: "📈",
        color: "#E74C3C",
        description: "Relatórios gerenciais e KPIs",
        stats: "12 relatórios disponíveis",
    },
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/modules", get(handlers::list_modules))
        .route("/modules/:id", get(handlers::module_summary))
}
