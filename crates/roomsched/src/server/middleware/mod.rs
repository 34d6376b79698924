pub mod room_validator;
