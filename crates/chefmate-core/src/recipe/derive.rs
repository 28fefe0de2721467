//! Derivation of grouped cooking steps from a flat instruction list.

use crate::models::{CookingStep, SubStep};

/// Partition a flat instruction list into grouped cooking steps.
///
/// The list is chunked into consecutive runs of `min(3, ceil(n/3))` items.
/// The first three groups are labeled "Preparation", "Cooking process", and
/// "Finishing"; any further group is "Stage N". Each instruction becomes its
/// own sub-step, so every original line appears exactly once and in order.
pub fn structure_flat_instructions(instructions: &[String]) -> Vec<CookingStep> {
    if instructions.is_empty() {
        return Vec::new();
    }

    let chunk_size = 3.min(instructions.len().div_ceil(3)).max(1);

    instructions
        .chunks(chunk_size)
        .enumerate()
        .map(|(group, lines)| CookingStep {
            name: format!("Step {}", group + 1),
            subtitle: group_label(group),
            sub_steps: lines
                .iter()
                .enumerate()
                .map(|(index, line)| SubStep {
                    name: format!("Action {}", index + 1),
                    instructions: vec![line.clone()],
                })
                .collect(),
        })
        .collect()
}

fn group_label(group: usize) -> String {
    match group {
        0 => "Preparation".to_string(),
        1 => "Cooking process".to_string(),
        2 => "Finishing".to_string(),
        later => format!("Stage {}", later + 1),
    }
}
