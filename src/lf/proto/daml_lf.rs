//! Envelope messages: `Archive` wraps a hashed `ArchivePayload`, which
//! selects one of the two dialect package encodings.

/// Hash function used for the payload digest. Only SHA-256 is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HashFunction {
    Sha256 = 0,
}

/// The outer envelope stored in each `.dalf` zip entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Archive {
    #[prost(enumeration = "HashFunction", tag = "1")]
    pub hash_function: i32,
    /// Serialized [`ArchivePayload`] bytes; the hash below covers these.
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    /// Optional lowercase hex SHA-256 of `payload`. When present it is
    /// verified and becomes the package id.
    #[prost(string, tag = "3")]
    pub hash: String,
}

/// Version header plus the dialect-tagged package bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArchivePayload {
    /// Free-text minor version: `"14"` or `"1.14"`.
    #[prost(string, tag = "1")]
    pub minor: String,
    #[prost(int32, tag = "2")]
    pub patch: i32,
    #[prost(oneof = "archive_payload::Sum", tags = "3, 4")]
    pub sum: Option<archive_payload::Sum>,
}

pub mod archive_payload {
    /// Dialect selector. The variant bytes are a serialized dialect-1 or
    /// dialect-2 `Package` message.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(bytes, tag = "3")]
        DamlLf1(Vec<u8>),
        #[prost(bytes, tag = "4")]
        DamlLf2(Vec<u8>),
    }
}
