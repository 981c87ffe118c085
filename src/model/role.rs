#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Admin = 1,
    PayrollManager = 2,
    Dispatcher = 3,
    Technician = 4,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::PayrollManager),
            3 => Some(Role::Dispatcher),
            4 => Some(Role::Technician),
            _ => None,
        }
    }

    /// Can see every technician's pay and move periods through the lifecycle.
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Admin | Role::PayrollManager)
    }
}
