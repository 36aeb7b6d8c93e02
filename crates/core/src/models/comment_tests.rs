// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::models::Role;
use chrono::Utc;

#[test]
fn test_comment_serde_round_trip() {
    let comment = Comment {
        id: "c-2".to_string(),
        content: "  kept verbatim  ".to_string(),
        author: User::new("u1", "Alice", Role::Admin),
        created_at: Utc::now(),
        internal: true,
    };
    let json = serde_json::to_string(&comment).unwrap();
    let parsed: Comment = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, comment);
    assert_eq!(parsed.content, "  kept verbatim  ");
}
