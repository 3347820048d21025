// Category lookup tables (training-time encoding contract)
pub mod catalog;

// Laptop specification and feature vector assembly
pub mod laptop;

// Price/category resolution policies
pub mod pricing;

// Domain-specific error types
pub mod errors;
