pub mod ship_handlers;
