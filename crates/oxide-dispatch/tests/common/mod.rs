#![allow(dead_code)]

use oxide_dispatch::{ServiceTable, WebService};

pub const SERVICES: &str = r#"{
    "services": [
        {
            "root_path": "/",
            "routes": [
                { "path": "/health", "method": "GET", "operation": "health" }
            ]
        },
        {
            "root_path": "/users",
            "routes": [
                { "path": "/", "method": "GET", "operation": "list_users" },
                { "path": "/", "method": "POST", "operation": "create_user" },
                { "path": "/{id}", "method": "GET", "operation": "get_user" },
                { "path": "/{id}", "method": "DELETE", "operation": "delete_user" },
                { "path": "/me", "method": "GET", "operation": "current_user" },
                { "path": "/{id}/posts/{post}", "method": "GET", "operation": "get_user_post" }
            ]
        },
        {
            "root_path": "/users/{id}/settings",
            "routes": [
                { "path": "/", "method": "GET", "operation": "get_settings" },
                { "path": "/{key}", "method": "GET", "operation": "get_setting" }
            ]
        },
        {
            "root_path": "/files.v1",
            "routes": [
                { "path": "/{name}", "method": "GET", "operation": "get_file" }
            ]
        }
    ]
}"#;

pub fn services() -> Vec<WebService> {
    ServiceTable::from_json(SERVICES)
        .unwrap_or_else(|e| panic!("Failed to load fixture services: {e}"))
        .services
}

pub fn operations<'a>(routes: &[&'a oxide_dispatch::RouteEntry]) -> Vec<&'a str> {
    let mut ops: Vec<_> = routes.iter().map(|r| r.operation.as_str()).collect();
    ops.sort_unstable();
    ops
}
