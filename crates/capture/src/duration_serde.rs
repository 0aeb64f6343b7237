// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `Duration` as `{ "secs": u64, "nanos": u32 }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

#[derive(Serialize, Deserialize)]
struct Parts {
    secs: u64,
    nanos: u32,
}

pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    Parts {
        secs: duration.as_secs(),
        nanos: duration.subsec_nanos(),
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let parts = Parts::deserialize(deserializer)?;
    Ok(Duration::new(parts.secs, parts.nanos))
}
