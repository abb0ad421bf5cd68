use crate::rng::Rng;

/// Picks a position in `0..count` that no tier excludes. When every
/// position is excluded, falls back to the first non-empty tier, never
/// the last one. `None` means nobody can be targeted.
pub fn select_target(count: usize, tiers: &[&[usize]], rng: &mut Rng) -> Option<usize> {
    let open: Vec<usize> = (0..count)
        .filter(|pos| !tiers.iter().any(|tier| tier.contains(pos)))
        .collect();
    if !open.is_empty() {
        return rng.pick(&open);
    }
    let (_, fallbacks) = tiers.split_last()?;
    fallbacks
        .iter()
        .find(|tier| !tier.is_empty())
        .and_then(|tier| rng.pick(tier))
}

/// Shifts contents one step along `positions`: each position takes the
/// content of the one before it, the first takes the last.
pub fn rotate<T: Copy>(slots: &mut [T], positions: &[usize]) {
    let Some(&last) = positions.last() else {
        return;
    };
    let mut carried = slots[last];
    for &pos in positions {
        carried = std::mem::replace(&mut slots[pos], carried);
    }
}

/// "there are no wolves" / "the only wolf is Alice" / "the wolves are
/// Alice, Bob and Cara", with names in seating order.
pub fn reveal_msg(singular: &str, plural: &str, names: &[String], positions: &[usize]) -> String {
    let mut positions = positions.to_vec();
    positions.sort_unstable();
    let people: Vec<&str> = positions.iter().map(|&pos| names[pos].as_str()).collect();
    match people.as_slice() {
        [] => format!("there are no {plural}"),
        [only] => format!("the only {singular} is {only}"),
        [rest @ .., last] => format!("the {plural} are {} and {last}", rest.join(", ")),
    }
}
