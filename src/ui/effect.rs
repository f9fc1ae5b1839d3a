use crate::store::CounterId;

/// Which screen a network result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    /// A detail screen, by the visit number it was opened with. Every
    /// navigation to a counter starts a new visit.
    Detail(u64),
}

/// Work requested by a reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full counter list for `screen`.
    FetchCounters { screen: Screen },
    /// Increment, then refetch the list for detail visit `visit`.
    Increment {
        id: CounterId,
        delta: i64,
        visit: u64,
    },
    /// Go to a route path such as `counter/3`.
    Navigate(String),
}
