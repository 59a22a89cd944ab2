/// Onset and offset edges of a consolidated activity mask.
///
/// Edges sit on the sample before each transition: an onset is the last
/// inactive sample before a run, an offset is the last active sample of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundaries {
    pub onsets: Vec<usize>,
    pub offsets: Vec<usize>,
}

/// Extract edges from the first difference of `mask`.
///
/// A rising step between `i` and `i + 1` is an onset at `i`; a falling step
/// is an offset at `i`. Runs that touch either end of the mask have no edge
/// there; see [`correct_boundaries`].
///
/// # Example
/// ```
/// use linelength::events::edges;
///
/// let b = edges(&[false, true, true, false, true]);
/// assert_eq!(b.onsets, vec![0, 3]);
/// assert_eq!(b.offsets, vec![2]);
/// ```
pub fn edges(mask: &[bool]) -> Boundaries {
    let mut boundaries = Boundaries::default();
    for (i, step) in mask.windows(2).enumerate() {
        match (step[0], step[1]) {
            (false, true) => boundaries.onsets.push(i),
            (true, false) => boundaries.offsets.push(i),
            _ => {}
        }
    }
    boundaries
}

/// Close runs that touch the ends of `mask` and pair edges into intervals.
///
/// If the mask is active at its first sample an onset at `0` is added; if it
/// is active at its last sample an offset at `mask.len() - 1` is added. Both
/// may apply to the same mask.
///
/// A run made of the first sample alone closes at `0` as well. Such an
/// interval is widened to `(0, 1)` so every interval keeps `onset < offset`.
///
/// # Errors
/// [`crate::Error::BoundaryMismatch`] if onset and offset counts still differ
/// after correction.
///
/// # Example
/// ```
/// use linelength::events::{correct_boundaries, edges};
///
/// let mask = [false, true, true, false, true, true];
/// let intervals = correct_boundaries(edges(&mask), &mask).unwrap();
/// assert_eq!(intervals, vec![(0, 2), (3, 5)]);
/// ```
pub fn correct_boundaries(
    mut boundaries: Boundaries,
    mask: &[bool],
) -> crate::Result<Vec<(usize, usize)>> {
    if mask.first() == Some(&true) {
        log::debug!("activity at first sample, adding onset at 0");
        boundaries.onsets.insert(0, 0);
    }
    if mask.last() == Some(&true) {
        let last = mask.len() - 1;
        log::debug!("activity at last sample, adding offset at {last}");
        boundaries.offsets.push(last);
    }

    let Boundaries { onsets, offsets } = boundaries;
    if onsets.len() != offsets.len() {
        return Err(crate::Error::BoundaryMismatch {
            onsets: onsets.len(),
            offsets: offsets.len(),
        });
    }

    Ok(onsets
        .into_iter()
        .zip(offsets)
        .map(|(onset, offset)| {
            if offset <= onset {
                log::debug!("single-sample run at {onset}, closing at {}", onset + 1);
                (onset, onset + 1)
            } else {
                (onset, offset)
            }
        })
        .collect())
}
