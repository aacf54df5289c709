use crate::ordering::divisions::ActiveDivision;
use crate::types::menu_item::MenuItem;

#[derive(Debug)]
pub struct OrderContext<'a> {
    pub division: &'a ActiveDivision,
    pub item: &'a MenuItem,
    pub sets: u32,
}
