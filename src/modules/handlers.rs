use axum::{extract::Path, http::StatusCode, Json};
use tracing::{instrument, warn};

use crate::auth::services::AuthUser;
use crate::modules::dto::{ModuleCard, ModuleSummary};
use crate::modules::{finance, hr, inventory, reporting, sales, scheduling, CATALOG};

#[instrument(skip_all)]
pub async fn list_modules(AuthUser(_user_id): AuthUser) -> Json<Vec<ModuleCard>> {
    Json(CATALOG.to_vec())
}

#[instrument(skip_all, fields(module = %id))]
pub async fn module_summary(
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ModuleSummary>, (StatusCode, String)> {
    let summary = match id.as_str() {
        "agendamento" => scheduling::summary(),
        "vendas" => sales::summary(),
        "financeiro" => finance::summary(),
        "rh" => hr::summary(),
        "estoque" => inventory::summary(),
        "relatorios" => reporting::summary(),
        _ => {
            warn!("unknown platform requested");
            return Err((StatusCode::NOT_FOUND, "Plataforma não encontrada".into()));
        }
    };
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catalog_lists_the_six_platforms() {
        let cards = list_modules(AuthUser("USR20250101120000".into())).await;
        let ids: Vec<&str> = cards.0.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            ["agendamento", "vendas", "financeiro", "rh", "estoque", "relatorios"]
        );
    }

    #[tokio::test]
    async fn every_catalog_entry_has_a_summary() {
        for card in CATALOG {
            let summary = module_summary(
                AuthUser("USR20250101120000".into()),
                Path(card.id.to_string()),
            )
            .await
            .expect("known module");
            assert_eq!(summary.0.id, card.id);
            assert_eq!(summary.0.name, card.name);
            assert!(!summary.0.metrics.is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_module_is_not_found() {
        let err = module_summary(
            AuthUser("USR20250101120000".into()),
            Path("crm".to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1, "Plataforma não encontrada");
    }
}
