//! 叫车业务模块
//!
//! 调度器、监视器，以及它们依赖的位置、司机、乘客、具体事件和事件文件加载。

// 子模块声明
mod dispatcher;
mod driver;
mod events;
mod loader;
mod location;
mod monitor;
mod rider;

// 重新导出公共接口
pub use dispatcher::Dispatcher;
pub use driver::{Driver, DriverId};
pub use events::{Cancel, Dropoff, DriverRequest, Pickup, RiderRequest, rank};
pub use loader::{EventFormat, EventSpec, load_events, parse_json, parse_text};
pub use location::{Location, manhattan_distance};
pub use monitor::{Activity, ActivityCategory, ActivityDescription, Monitor, Report};
pub use rider::{Rider, RiderId, RiderStatus};
