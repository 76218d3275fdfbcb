use std::fmt;

/// Views the core can navigate to. The rendered paths match the outer
/// application's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// The bills list view
    Bills,
    /// The new-bill form view
    NewBill,
}

impl RoutePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// View-switching collaborator invoked on terminal transitions. The core
/// never consults a return value.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: RoutePath);
}

/// Preview surface for an uploaded proof file (a modal in the web front
/// end). Opening a preview never mutates a bill.
pub trait BillPreview: Send + Sync {
    fn open(&self, file_url: &str);
}
