use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::assets_errors::Result;
use super::assets_model::*;
use super::assets_repository::{ComputerRepository, DeviceRepository, PhoneLineRepository};

/// Service for managing asset records. Assignment transitions live in
/// the assignments module; this service never touches holder pointers.
pub struct AssetService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_computer(&self, new_computer: NewComputer) -> Result<Computer> {
        ComputerRepository::new(self.pool.clone()).create(new_computer)
    }

    pub fn update_computer(&self, update: ComputerUpdate) -> Result<Computer> {
        ComputerRepository::new(self.pool.clone()).update(update)
    }

    pub fn get_computer(&self, computer_id: &str) -> Result<Computer> {
        ComputerRepository::new(self.pool.clone()).get_by_id(computer_id)
    }

    pub fn list_computers(&self, model_filter: Option<&str>) -> Result<Vec<Computer>> {
        ComputerRepository::new(self.pool.clone()).list(model_filter)
    }

    pub fn delete_computer(&self, computer_id: &str) -> Result<()> {
        ComputerRepository::new(self.pool.clone()).delete(computer_id)?;
        Ok(())
    }

    pub fn create_device(&self, new_device: NewDevice) -> Result<Device> {
        DeviceRepository::new(self.pool.clone()).create(new_device)
    }

    pub fn update_device(&self, update: DeviceUpdate) -> Result<Device> {
        DeviceRepository::new(self.pool.clone()).update(update)
    }

    pub fn get_device(&self, device_id: &str) -> Result<Device> {
        DeviceRepository::new(self.pool.clone()).get_by_id(device_id)
    }

    pub fn list_devices(&self, model_filter: Option<&str>) -> Result<Vec<Device>> {
        DeviceRepository::new(self.pool.clone()).list(model_filter)
    }

    pub fn delete_device(&self, device_id: &str) -> Result<()> {
        DeviceRepository::new(self.pool.clone()).delete(device_id)?;
        Ok(())
    }

    pub fn create_phone_line(&self, new_line: NewPhoneLine) -> Result<PhoneLine> {
        PhoneLineRepository::new(self.pool.clone()).create(new_line)
    }

    pub fn update_phone_line(&self, update: PhoneLineUpdate) -> Result<PhoneLine> {
        PhoneLineRepository::new(self.pool.clone()).update(update)
    }

    pub fn get_phone_line(&self, line_id: &str) -> Result<PhoneLine> {
        PhoneLineRepository::new(self.pool.clone()).get_by_id(line_id)
    }

    pub fn list_phone_lines(&self, provider_filter: Option<&str>) -> Result<Vec<PhoneLine>> {
        PhoneLineRepository::new(self.pool.clone()).list(provider_filter)
    }

    pub fn delete_phone_line(&self, line_id: &str) -> Result<()> {
        PhoneLineRepository::new(self.pool.clone()).delete(line_id)?;
        Ok(())
    }
}
