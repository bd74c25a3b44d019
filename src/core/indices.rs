use hashbrown::HashMap;

use crate::types::GuestId;

/// Position of each guest id within the roster order.
pub type IdIndex = HashMap<GuestId, usize>;
