pub mod discount;
pub mod margin;
pub mod menu_item;
pub mod price;
pub mod service_type;
pub mod time_of_day;
pub mod time_slot;
