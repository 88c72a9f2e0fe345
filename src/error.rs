use std::fmt::Display;

pub type ModtimesResult<T> = Result<T, ModtimesErr>;

#[derive(Debug)]
pub enum ModtimesErr {
    InfrastructureError(String),
    SystemError(String),
}

impl Display for ModtimesErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InfrastructureError(ref msg) => write!(f, "InfrastructureErr: {}", msg),
            Self::SystemError(ref msg) => write!(f, "SystemErr: {}", msg),
        }
    }
}

impl std::error::Error for ModtimesErr {}

impl From<std::io::Error> for ModtimesErr {
    fn from(value: std::io::Error) -> Self {
        ModtimesErr::InfrastructureError(format!("IO Error: {}", value))
    }
}

impl From<aws_sdk_s3::types::SdkError<aws_sdk_s3::error::ListObjectsV2Error>> for ModtimesErr {
    fn from(value: aws_sdk_s3::types::SdkError<aws_sdk_s3::error::ListObjectsV2Error>) -> Self {
        ModtimesErr::InfrastructureError(format!("S3 list object error: {}", value))
    }
}

impl From<aws_sdk_s3::types::SdkError<aws_sdk_s3::error::HeadObjectError>> for ModtimesErr {
    fn from(value: aws_sdk_s3::types::SdkError<aws_sdk_s3::error::HeadObjectError>) -> Self {
        ModtimesErr::InfrastructureError(format!("S3 head object error: {}", value))
    }
}
