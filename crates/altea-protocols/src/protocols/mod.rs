pub mod ablls_r;
pub mod carolina;
pub mod portage;
pub mod vb_mapp;
