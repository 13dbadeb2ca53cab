//! # API crate — shared fullstack server functions for HealthyBowl
//!
//! Backbone of the HealthyBowl fullstack architecture: every Dioxus server
//! function the web frontend calls lives here, along with the DTOs and the
//! backend REST client they share. All business logic, persistence, payment
//! processing, and nutrition computation live in the external backend API;
//! this crate is a thin translation layer.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | `server` | Environment configuration (backend URL, Cloudinary credentials, site URL) |
//! | [`rest`] | — | Backend client, `{success, data, message}` envelope unwrap, list-shape normalization |
//! | [`models`] | — | DTOs mirrored from the backend, wasm-safe throughout |
//! | [`services`] | — | Server functions, one module per resource (auth, users, orders, ...) |
//! | [`media`] | — | Cloudinary upload URL + signed `destroy` (secret stays server-side) |
//! | [`payment`] | — | Payment gateway callback relay envelope and forward |

#[cfg(feature = "server")]
pub mod config;
pub mod media;
pub mod models;
pub mod payment;
pub mod rest;
pub mod services;

pub use models::{
    AuthSession, BowlItem, BowlTemplate, Category, GoalCode, Ingredient, NewBowl, NewOrder,
    NutritionFacts, NutritionGoal, NutritionPercent, NutritionTotals, Order, OrderBowl,
    OrderStatus, Promotion, Role, StoreLocation, TemplateStep, User, UserStatus,
};
pub use rest::Page;
