use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role_id: u8,
    /// Set when the console account belongs to a field technician
    pub technician_id: Option<u64>,
    pub is_active: bool,
}
