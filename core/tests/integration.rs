//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every
//! `ContactsApi` operation over real HTTP through `UreqTransport`.

use std::net::SocketAddr;

use contacts_core::{ApiError, ApiResponse, ClientConfig, Contact, ContactsApi};

/// Serve `app` on a random loopback port from a background thread.
fn spawn_server(app: axum::Router) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, app).await
        })
        .unwrap();
    });

    addr
}

fn api_for(addr: SocketAddr) -> ContactsApi {
    ContactsApi::new(ClientConfig::new(&format!("http://{addr}")))
}

#[test]
fn crud_lifecycle() {
    let api = api_for(spawn_server(mock_server::app()));

    // Step 1: list — should be empty.
    let listed = api.fetch_contacts().unwrap();
    assert_eq!(listed.status, 200);
    assert!(listed.data.is_empty(), "expected empty list");

    // Step 2: create a contact; the server assigns the id.
    let created = api
        .create_contact(&Contact::new("Ada", "ada@example.com", "555-0100"))
        .unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.data.name, "Ada");
    let id = created.data.id.expect("server assigns an id");

    // Step 3: update phone.
    let mut changed = created.data.clone();
    changed.phone = "555-0199".to_string();
    let updated = api.update_contact(&changed).unwrap();
    assert_eq!(updated, ApiResponse { data: changed.clone(), status: 200 });

    // Step 4: list — should have the updated contact.
    let listed = api.fetch_contacts().unwrap();
    assert_eq!(listed.data, vec![changed]);

    // Step 5: delete.
    let deleted = api.delete_contact(id).unwrap();
    assert_eq!(deleted.status, 204);

    // Step 6: delete again — should be NotFound.
    assert_eq!(api.delete_contact(id).unwrap_err(), ApiError::NotFound);

    // Step 7: update after delete — should be NotFound.
    let gone = Contact::new("Ada", "ada@example.com", "0").with_id(id);
    assert_eq!(api.update_contact(&gone).unwrap_err(), ApiError::NotFound);

    // Step 8: list — should be empty again.
    assert!(api.fetch_contacts().unwrap().data.is_empty(), "expected empty list after delete");
}

#[test]
fn fetch_returns_seeded_contacts_unmodified() {
    let seed = mock_server::Contact {
        id: 1,
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        phone: "1".to_string(),
    };
    let api = api_for(spawn_server(mock_server::app_with_contacts(vec![seed])));

    let listed = api.fetch_contacts().unwrap();
    assert_eq!(
        listed,
        ApiResponse {
            data: vec![Contact::new("A", "a@x.com", "1").with_id(1)],
            status: 200,
        }
    );
}

#[test]
fn concurrent_creates_resolve_independently() {
    let api = api_for(spawn_server(mock_server::app()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let api = api.clone();
            std::thread::spawn(move || {
                api.create_contact(&Contact::new(&format!("C{i}"), "c@x.com", "0"))
                    .unwrap()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().data.id.unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = api_for(addr).fetch_contacts().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
