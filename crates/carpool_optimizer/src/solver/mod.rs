pub mod assignment;
pub mod route_cost;
pub mod route_order;
pub mod search;
