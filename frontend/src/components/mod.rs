pub mod tender_modal;
