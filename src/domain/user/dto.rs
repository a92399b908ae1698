use crate::domain::Role;

#[derive(Debug, Clone)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
