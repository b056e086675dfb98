use super::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    /// Identity id issued by the auth collaborator
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}
