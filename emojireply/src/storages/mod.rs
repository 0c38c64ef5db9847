mod status_storage;

pub use status_storage::{
    STATUS_FILE_NAME, StatusData, StatusFileStorage, StatusMemoryStorage, StatusStorageTrait,
};
