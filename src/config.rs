// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::diagram::DEFAULT_RENDERER;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub diagram: DiagramConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    pub output_path: PathBuf,
    pub renderer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env file if present
        let _ = dotenv::dotenv();

        Config {
            diagram: DiagramConfig {
                output_path: env::var("DIAGRAM_OUTPUT_PATH")
                    .unwrap_or_else(|_| "diagram.png".to_string())
                    .into(),
                renderer: env::var("GRAPHVIZ_DOT")
                    .unwrap_or_else(|_| DEFAULT_RENDERER.to_string()),
            },
            database: DatabaseConfig {
                // Without a URL the schema is only rendered, never applied
                url: env::var("DATABASE_URL").ok(),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("DATABASE_MAX_CONNECTIONS must be a number"),
            },
        }
    }
}
