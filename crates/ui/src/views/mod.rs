mod landing;
mod staff;
mod student;

#[cfg(test)]
mod submit_handles;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use landing::LandingView;
pub use staff::StaffView;
pub use student::StudentView;
