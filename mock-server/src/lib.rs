use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body accepted by create and update. A client-supplied `id` is ignored.
#[derive(Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInput {
    fn into_contact(self, id: u64) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    contacts: BTreeMap<u64, Contact>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_contacts(Vec::new())
}

/// Router preloaded with `seed`. New ids continue after the largest seeded id.
pub fn app_with_contacts(seed: Vec<Contact>) -> Router {
    let next_id = seed.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    let contacts = seed.into_iter().map(|c| (c.id, c)).collect();
    let db: Db = Arc::new(RwLock::new(Store { next_id, contacts }));
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", put(update_contact).delete(delete_contact))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, app()).await
}

pub async fn run_with(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock contacts server listening");
    }
    axum::serve(listener, app).await
}

async fn list_contacts(State(db): State<Db>) -> Json<Vec<Contact>> {
    let store = db.read().await;
    Json(store.contacts.values().cloned().collect())
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<ContactInput>,
) -> (StatusCode, Json<Contact>) {
    let mut store = db.write().await;
    let contact = input.into_contact(store.next_id);
    store.next_id += 1;
    store.contacts.insert(contact.id, contact.clone());
    (StatusCode::CREATED, Json(contact))
}

async fn update_contact(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, StatusCode> {
    let mut store = db.write().await;
    let contact = store.contacts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *contact = input.into_contact(id);
    Ok(Json(contact.clone()))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.contacts.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_to_json() {
        let contact = Contact {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "A");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["phone"], "1");
    }

    #[test]
    fn input_ignores_client_id() {
        let input: ContactInput =
            serde_json::from_str(r#"{"id":99,"name":"A","email":"a@x.com","phone":"1"}"#).unwrap();
        assert_eq!(input.into_contact(3).id, 3);
    }

    #[test]
    fn input_rejects_missing_phone() {
        let result: Result<ContactInput, _> = serde_json::from_str(r#"{"name":"A","email":"a@x.com"}"#);
        assert!(result.is_err());
    }
}
