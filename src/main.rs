//! Session inspector — boots the auth context against the on-disk store and
//! logs who is signed in plus this month's summary for them.

use std::sync::Arc;

use chrono::Utc;
use gofinances::auth::{AuthContext, GoogleUserInfoClient};
use gofinances::categories::CATEGORIES;
use gofinances::config::AppConfig;
use gofinances::identity::{AuthRequest, AuthorizationResult, IdentityAdapter, IdentityError};
use gofinances::storage::FileStore;
use gofinances::transactions::{Ledger, Month, MonthlySummary};

/// Stand-in for the browser flow; this binary has no UI to redirect through.
struct NoBrowser;

#[async_trait::async_trait]
impl IdentityAdapter for NoBrowser {
    async fn authenticate(&self, _request: &AuthRequest) -> Result<AuthorizationResult, IdentityError> {
        Err(IdentityError::Unavailable("no browser in the session inspector".into()))
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let store = Arc::new(FileStore::new(&config.storage_path));

    let mut builder = AuthContext::builder(store.clone());
    if let Some(google) = config.google.clone() {
        let user_info = GoogleUserInfoClient::new(config.http).expect("http client build failed");
        builder = builder.google(google, Arc::new(NoBrowser), Arc::new(user_info));
    }
    let auth = builder.build();

    let user = match auth.restore().await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "session restore failed");
            std::process::exit(1);
        }
    };

    let Some(user) = user else {
        tracing::info!(path = %config.storage_path.display(), "no user signed in");
        return;
    };
    tracing::info!(user_id = %user.id, name = %user.name, "signed-in user");

    let transactions = match Ledger::load(store.as_ref(), &user.id).await {
        Ok(transactions) => transactions,
        Err(e) => {
            tracing::error!(error = %e, "ledger load failed");
            std::process::exit(1);
        }
    };

    let month = Month::of(&Utc::now());
    match MonthlySummary::compute(&transactions, CATEGORIES, month) {
        Ok(summary) => {
            tracing::info!(
                year = month.year(),
                month = month.month(),
                entries = summary.highlights.entries,
                expenses = summary.highlights.expenses,
                total = summary.highlights.total,
                "monthly summary"
            );
            for category in &summary.categories {
                tracing::info!(category = category.name, total = category.total, percent = %category.percent_label(), "category");
            }
        }
        Err(e) => tracing::error!(error = %e, "summary failed"),
    }
}
