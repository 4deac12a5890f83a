mod batch;
mod item;
mod reference;
mod subject;

pub use self::batch::DownloadBatch;
pub use self::item::DownloadItem;
pub use self::reference::{ResourceKind, ResourceReference};
pub use self::subject::Subject;
