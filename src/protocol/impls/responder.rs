use std::sync::Arc;
use crate::common::structs::custom_error::CustomError;
use crate::protocol::enums::error_code::ErrorCode;
use crate::protocol::enums::error_level::ErrorLevel;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::responder::Responder;
use crate::protocol::structs::talker::Talker;

impl Responder {
    pub fn new(talker: Arc<Talker>, request_sequence: u16) -> Responder {
        Responder { talker, request_sequence }
    }

    pub fn respond(&self, packet: Packet) -> Result<(), CustomError> {
        self.talker.respond(self.request_sequence, packet)
    }

    pub fn respond_ok(&self, message: &str) -> Result<(), CustomError> {
        self.respond(Packet::Ok { message: message.to_string() })
    }

    pub fn respond_error(&self, code: ErrorCode, message: &str) -> Result<(), CustomError> {
        self.respond(Packet::Error {
            level: ErrorLevel::Error,
            code,
            message: message.to_string(),
        })
    }
}
