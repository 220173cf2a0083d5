//! OpenAPI documentation for the gateway's route surface.
//!
//! The document is assembled from structured route descriptors at request
//! time and served as plain JSON; `/api-docs` wraps it in a Swagger UI
//! page so the API can be explored interactively.

use axum::response::Html;
use axum::Json;

use super::rate_limit::{MAX_REQUESTS_PER_MINUTE, REJECTION_MESSAGE};

// ==============================================================================
// Route Descriptors
// ==============================================================================

struct ParamDoc {
    name: &'static str,
    description: &'static str,
    /// OpenAPI schema type for the path parameter.
    schema_type: &'static str,
    example: serde_json::Value,
}

struct RouteDoc {
    path: &'static str,
    summary: &'static str,
    description: &'static str,
    param: ParamDoc,
    success_description: &'static str,
    success_example: serde_json::Value,
    failure_description: &'static str,
}

fn route_docs() -> Vec<RouteDoc> {
    vec![
        RouteDoc {
            path: "/block/{height}",
            summary: "Get a block by height",
            description: "Resolves the height to a block hash on the node, then returns \
                          the node's block JSON unchanged.",
            param: ParamDoc {
                name: "height",
                description: "Height of the block to fetch; a non-negative integer.",
                schema_type: "integer",
                example: serde_json::json!(100),
            },
            success_description: "The node's verbose block object.",
            success_example: serde_json::json!({
                "hash": "3f1a0b1c2d3e4f56789abcdef1234567890abcdef1234567890abcdef1234567",
                "height": 100,
                "time": 1623859200,
                "tx": ["b2c24a45b3a1d9eb"]
            }),
            failure_description: "Invalid height, or an error reported by the node.",
        },
        RouteDoc {
            path: "/transaction/{txid}",
            summary: "Get a transaction by txid",
            description: "Returns the node's decoded transaction JSON unchanged. The txid \
                          is forwarded as-is; the node validates its format.",
            param: ParamDoc {
                name: "txid",
                description: "Transaction id (hash) to fetch.",
                schema_type: "string",
                example: serde_json::json!(
                    "e093d75e245102d6ba06c2ad562905f626bde30e36fc97a519d14b2d85952cea"
                ),
            },
            success_description: "The node's decoded transaction object.",
            success_example: serde_json::json!({
                "txid": "e093d75e245102d6ba06c2ad562905f626bde30e36fc97a519d14b2d85952cea",
                "confirmations": 6
            }),
            failure_description: "Malformed or unknown txid, or an error reported by the node.",
        },
        RouteDoc {
            path: "/address/{address}/balance",
            summary: "Get the balance of an address",
            description: "Sums the amounts of the wallet's unspent outputs paying to the \
                          address, mempool outputs included.",
            param: ParamDoc {
                name: "address",
                description: "Address whose unspent outputs are summed.",
                schema_type: "string",
                example: serde_json::json!("bcrt1qraltzuz3vv6c4h96rg2p8x0d7edee88sugytk3"),
            },
            success_description: "The address and its total balance in BTC.",
            success_example: serde_json::json!({
                "address": "bcrt1qraltzuz3vv6c4h96rg2p8x0d7edee88sugytk3",
                "balance": 0.005
            }),
            failure_description: "Unknown wallet, invalid address, or an error reported by the node.",
        },
    ]
}

// ==============================================================================
// Document Assembly
// ==============================================================================

fn path_item(doc: &RouteDoc) -> serde_json::Value {
    serde_json::json!({
        "get": {
            "summary": doc.summary,
            "description": doc.description,
            "parameters": [{
                "in": "path",
                "name": doc.param.name,
                "required": true,
                "description": doc.param.description,
                "schema": { "type": doc.param.schema_type },
                "example": doc.param.example,
            }],
            "responses": {
                "200": {
                    "description": doc.success_description,
                    "content": {
                        "application/json": {
                            "example": doc.success_example,
                        }
                    }
                },
                "400": {
                    "description": doc.failure_description,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/ErrorResponse" },
                        }
                    }
                },
                "429": {
                    "description": "Request ceiling exceeded for this client.",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/ErrorResponse" },
                            "example": { "error": REJECTION_MESSAGE },
                        }
                    }
                }
            }
        }
    })
}

fn document() -> serde_json::Value {
    let mut paths = serde_json::Map::new();
    for doc in route_docs() {
        paths.insert(doc.path.to_owned(), path_item(&doc));
    }

    serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Ponte API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": format!(
                "REST gateway for Bitcoin Core block, transaction, and address balance \
                 queries. All routes share a ceiling of {MAX_REQUESTS_PER_MINUTE} requests \
                 per minute per client."
            ),
        },
        "paths": serde_json::Value::Object(paths),
        "components": {
            "schemas": {
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "string",
                            "description": "Error message, relayed from the node where applicable.",
                        }
                    },
                    "required": ["error"],
                }
            }
        }
    })
}

// ==============================================================================
// Handlers
// ==============================================================================

const SWAGGER_UI_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Ponte API documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: '/api-docs/openapi.json',
        dom_id: '#swagger-ui',
      });
    };
  </script>
</body>
</html>
"#;

/// GET /api-docs
pub(super) async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// GET /api-docs/openapi.json
pub(super) async fn openapi_document() -> Json<serde_json::Value> {
    Json(document())
}
