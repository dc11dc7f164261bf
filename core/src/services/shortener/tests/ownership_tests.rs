//! Ownership rules across two users

use std::collections::HashSet;

use crate::errors::{DomainError, ErrorKind, LinkError};
use crate::services::link::LinkServiceConfig;
use crate::services::shortener::ShortenerConfig;

use super::scenario_tests::{shortener, shortener_with, test_config, Shortener};

struct Pair {
    shortener: Shortener,
    alice: String,
    bob: String,
}

async fn pair(shortener: Shortener) -> Pair {
    let alice = shortener.sign_up("alice@x.com", "pw-a").await.unwrap().session_token;
    let bob = shortener.sign_up("bob@x.com", "pw-b").await.unwrap().session_token;
    Pair {
        shortener,
        alice,
        bob,
    }
}

#[tokio::test]
async fn test_ownership_scenario() {
    let Pair {
        shortener,
        alice,
        bob,
    } = pair(shortener()).await;

    let c1 = shortener
        .create_link(Some(&alice), "http://alice.example")
        .await
        .unwrap()
        .code;

    let bobs = shortener.list_my_links(Some(&bob)).await.unwrap();
    assert!(!bobs.contains_key(&c1));

    let err = shortener.delete_link(Some(&bob), &c1).await.unwrap_err();
    assert_eq!(err, DomainError::Link(LinkError::Forbidden));

    assert_eq!(
        shortener.resolve_for_redirect(&c1).await.unwrap(),
        "http://alice.example"
    );
}

#[tokio::test]
async fn test_foreign_update_never_mutates() {
    let Pair {
        shortener,
        alice,
        bob,
    } = pair(shortener()).await;
    let c1 = shortener
        .create_link(Some(&alice), "http://alice.example")
        .await
        .unwrap()
        .code;

    for destination in ["http://bob.example", ""] {
        let err = shortener
            .update_link(Some(&bob), &c1, destination)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    let link = shortener.get_link(&c1).await.unwrap();
    assert_eq!(link.destination_url, "http://alice.example");
    assert_eq!(link.updated_at, link.created_at);
}

#[tokio::test]
async fn test_anonymous_redirect_and_lookup() {
    let Pair {
        shortener, alice, ..
    } = pair(shortener()).await;
    let c1 = shortener
        .create_link(Some(&alice), "http://alice.example")
        .await
        .unwrap()
        .code;

    shortener.logout(Some(&alice)).await.unwrap();

    assert_eq!(
        shortener.resolve_for_redirect(&c1).await.unwrap(),
        "http://alice.example"
    );
    assert_eq!(shortener.get_link(&c1).await.unwrap().code, c1);
}

#[tokio::test]
async fn test_hidden_foreign_links() {
    let Pair {
        shortener,
        alice,
        bob,
    } = pair(shortener_with(ShortenerConfig {
        links: LinkServiceConfig {
            hide_foreign_links: true,
            ..Default::default()
        },
        ..test_config()
    }))
    .await;
    let c1 = shortener
        .create_link(Some(&alice), "http://alice.example")
        .await
        .unwrap()
        .code;

    let update = shortener
        .update_link(Some(&bob), &c1, "http://bob.example")
        .await
        .unwrap_err();
    let delete = shortener.delete_link(Some(&bob), &c1).await.unwrap_err();
    let missing = shortener.delete_link(Some(&bob), "nope00").await.unwrap_err();

    assert_eq!(update.kind(), ErrorKind::NotFound);
    assert_eq!(delete.kind(), ErrorKind::NotFound);
    assert_eq!(missing.kind(), ErrorKind::NotFound);
    assert!(shortener.resolve_for_redirect(&c1).await.is_ok());
}

#[tokio::test]
async fn test_codes_unique_across_users() {
    let Pair {
        shortener,
        alice,
        bob,
    } = pair(shortener()).await;

    let mut codes = HashSet::new();
    for i in 0..200 {
        let token = if i % 2 == 0 { &alice } else { &bob };
        let link = shortener
            .create_link(Some(token), &format!("http://example.com/{i}"))
            .await
            .unwrap();
        assert!(codes.insert(link.code));
    }

    let alices = shortener.list_my_links(Some(&alice)).await.unwrap();
    let bobs = shortener.list_my_links(Some(&bob)).await.unwrap();
    assert_eq!(alices.len(), 100);
    assert_eq!(bobs.len(), 100);
    assert!(alices.keys().all(|code| !bobs.contains_key(code)));
}
