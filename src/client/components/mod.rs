pub mod admin_nav;
pub mod navbar;
pub mod notes;
pub mod page;
pub mod toast;
pub mod wizard;

pub use admin_nav::AdminLayout;
pub use navbar::Navbar;
pub use notes::NotesPanel;
pub use page::Page;
pub use toast::ToastContainer;
pub use wizard::WizardDialog;
