/// Number of classes in the network's output head
pub const NUM_CLASSES: usize = 5;

/// Output labels in the order the network emits its logits
pub const SPECIES_LABELS: [&str; NUM_CLASSES] =
    ["Catla", "Common carp", "Pangasius", "Rohu", "Singi"];
