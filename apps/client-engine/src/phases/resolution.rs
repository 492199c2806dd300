//! Resolution handler: passive. The hand is redrawn from the view-model;
//! no action is offered while effects play out.

use crate::phases::buttons::ActionBar;

pub fn buttons() -> ActionBar {
    ActionBar::default()
}
