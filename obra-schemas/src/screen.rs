use serde::{Deserialize, Serialize};
use std::fmt;

/// Every screen the session can be on. Navigation between them is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Home,
    GlobalDashboard,
    ProjectList,
    ProjectDetail,
    Inventory,
    RequirementForm,
    RequirementList,
    Approvals,
}

impl Screen {
    pub const ALL: [Screen; 12] = [
        Screen::Welcome,
        Screen::Login,
        Screen::Register,
        Screen::ForgotPassword,
        Screen::Home,
        Screen::GlobalDashboard,
        Screen::ProjectList,
        Screen::ProjectDetail,
        Screen::Inventory,
        Screen::RequirementForm,
        Screen::RequirementList,
        Screen::Approvals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Welcome => "Bienvenida",
            Screen::Login => "Iniciar sesión",
            Screen::Register => "Registro",
            Screen::ForgotPassword => "Recuperar contraseña",
            Screen::Home => "Inicio",
            Screen::GlobalDashboard => "Dashboard global",
            Screen::ProjectList => "Proyectos",
            Screen::ProjectDetail => "Detalle de proyecto",
            Screen::Inventory => "Inventario",
            Screen::RequirementForm => "Nuevo requerimiento",
            Screen::RequirementList => "Requerimiento",
            Screen::Approvals => "Aprobaciones",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
