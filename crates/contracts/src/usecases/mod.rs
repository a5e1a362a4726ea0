pub mod u001_check_status;
pub mod u002_process_documents;
pub mod u003_ask_question;
