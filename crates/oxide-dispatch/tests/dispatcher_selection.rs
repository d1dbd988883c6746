//! Tests for dispatcher selection and full resolution.

mod common;
use common::*;

use oxide_dispatch::{DispatchError, WebService, resolve, select_dispatcher};

#[test]
fn test_no_dispatchers_is_not_found() {
    let services: Vec<WebService> = Vec::new();
    let err = select_dispatcher("/users", &services).unwrap_err();
    assert!(matches!(err, DispatchError::NotFound { .. }));
}

#[test]
fn test_no_matching_dispatcher_is_not_found() {
    let services = vec![WebService::new("/users"), WebService::new("/posts")];
    let err = select_dispatcher("/comments", &services).unwrap_err();
    assert!(matches!(err, DispatchError::NotFound { ref path } if path == "/comments"));
}

#[test]
fn test_most_specific_root_wins() {
    let services = services();
    let (svc, remainder) = select_dispatcher("/users/42/settings/theme", &services).unwrap();
    assert_eq!(svc.root_path, "/users/{id}/settings");
    assert_eq!(remainder, "/theme");

    let (svc, remainder) = select_dispatcher("/users/42", &services).unwrap();
    assert_eq!(svc.root_path, "/users");
    assert_eq!(remainder, "/42");
}

#[test]
fn test_root_dispatcher_catches_the_rest() {
    let services = services();
    let (svc, remainder) = select_dispatcher("/health", &services).unwrap();
    assert_eq!(svc.root_path, "/");
    assert_eq!(remainder, "/health");
}

#[test]
fn test_escaped_root_does_not_match_lookalike() {
    let services = services();
    let (svc, _) = select_dispatcher("/filesXv1/a", &services).unwrap();
    assert_eq!(svc.root_path, "/");

    let found = resolve("/files.v1/report.pdf", &services).unwrap();
    assert_eq!(found.dispatcher.root_path, "/files.v1");
    assert_eq!(operations(&found.routes), ["get_file"]);
}

#[test]
fn test_resolve_end_to_end() {
    let services = services();

    let found = resolve("/users/me", &services).unwrap();
    assert_eq!(operations(&found.routes), ["current_user"]);

    let found = resolve("/users/42/settings", &services).unwrap();
    assert_eq!(found.remainder, "");
    assert_eq!(operations(&found.routes), ["get_setting", "get_settings"]);

    let found = resolve("/users/42/settings/theme", &services).unwrap();
    assert_eq!(operations(&found.routes), ["get_setting"]);

    let found = resolve("/users", &services).unwrap();
    assert_eq!(found.routes.len(), 6);
}

#[test]
fn test_resolve_unmatched_route() {
    let services = services();
    let err = resolve("/users/42/posts", &services).unwrap_err();
    assert!(matches!(err, DispatchError::NotFound { .. }));
}
