//! Conversion between caller layouts and the canonical channels x samples view.

use crate::config::Orientation;
use ndarray::{Array, Array2, ArrayBase, ArrayView2, Axis, Data, Dimension, Ix1, Ix2};

/// Borrow `a` as a (channels x samples) view.
///
/// One-dimensional input becomes a single row. Any other rank than one or
/// two is rejected with [`crate::Error::Dimensionality`].
pub fn canonical_view<A, S, D>(
    a: &ArrayBase<S, D>,
    orientation: Orientation,
) -> crate::Result<ArrayView2<'_, A>>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let ndim = a.ndim();
    let view = a.view().into_dyn();
    match ndim {
        1 => Ok(view
            .into_dimensionality::<Ix1>()
            .map_err(|_| crate::Error::Dimensionality { ndim })?
            .insert_axis(Axis(0))),
        2 => {
            let view = view
                .into_dimensionality::<Ix2>()
                .map_err(|_| crate::Error::Dimensionality { ndim })?;
            Ok(match orientation {
                Orientation::ChannelsByTime => view,
                Orientation::TimeByChannels => view.reversed_axes(),
            })
        }
        _ => Err(crate::Error::Dimensionality { ndim }),
    }
}

/// Restore a canonical (channels x samples) array to the caller's layout.
///
/// Inverse of [`canonical_view`] for an input of dimension `D` with `ndim` axes.
pub fn restore<A, D>(
    canonical: Array2<A>,
    ndim: usize,
    orientation: Orientation,
) -> crate::Result<Array<A, D>>
where
    D: Dimension,
{
    let restored = match ndim {
        1 => canonical.index_axis_move(Axis(0), 0).into_dyn(),
        _ => match orientation {
            Orientation::ChannelsByTime => canonical.into_dyn(),
            Orientation::TimeByChannels => canonical.reversed_axes().into_dyn(),
        },
    };
    restored
        .into_dimensionality::<D>()
        .map_err(|_| crate::Error::Dimensionality { ndim })
}
