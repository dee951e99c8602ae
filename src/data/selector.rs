//! Checkbox-driven series selection.

use crate::data::options::PlotOptions;
use crate::data::series::{DataSets, Series};

/// Something that draws series into a named plot target.
pub trait ChartRenderer {
    fn plot(&mut self, target: &str, series: Vec<Series>, options: &PlotOptions);
}

/// A container of selector inputs (checkboxes).
pub trait SelectorContainer {
    /// Names of the checked inputs in UI order. Inputs without a name yield
    /// `None`.
    fn checked_names(&self) -> Vec<Option<&str>>;
}

/// Plot the checked series of `data_sets` into `target` with the parallel
/// chart options.
///
/// Nothing is drawn when no checked input matches a data set; whatever the
/// target showed before stays as it was.
pub fn plot_selected<R, C>(renderer: &mut R, target: &str, data_sets: &DataSets, selector: &C)
where
    R: ChartRenderer + ?Sized,
    C: SelectorContainer + ?Sized,
{
    plot_selected_with(
        renderer,
        target,
        data_sets,
        selector,
        &PlotOptions::parallel(),
    );
}

/// Same as [`plot_selected`] with caller-chosen options.
pub fn plot_selected_with<R, C>(
    renderer: &mut R,
    target: &str,
    data_sets: &DataSets,
    selector: &C,
    options: &PlotOptions,
) where
    R: ChartRenderer + ?Sized,
    C: SelectorContainer + ?Sized,
{
    let data = selected_series(data_sets, selector);
    if data.is_empty() {
        tracing::debug!(plot = target, "no series selected, keeping previous plot");
        return;
    }
    tracing::debug!(plot = target, count = data.len(), "plotting selected series");
    renderer.plot(target, data, options);
}

/// Series for the checked inputs, in UI order.
pub fn selected_series<C>(data_sets: &DataSets, selector: &C) -> Vec<Series>
where
    C: SelectorContainer + ?Sized,
{
    selector
        .checked_names()
        .into_iter()
        .flatten()
        .filter(|key| !key.is_empty())
        .filter_map(|key| data_sets.get(key).cloned())
        .collect()
}
