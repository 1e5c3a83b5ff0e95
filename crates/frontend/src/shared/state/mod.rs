pub mod resource_store;
