use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::{computers, devices, phone_lines};

use super::assets_errors::{AssetError, Result};
use super::assets_model::*;

/// Repository for managing computer records
pub struct ComputerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ComputerRepository {
    /// Creates a new ComputerRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new computer in storage with cleared holder pointers
    pub fn create(&self, new_computer: NewComputer) -> Result<Computer> {
        new_computer.validate()?;

        let mut computer_db: ComputerDB = new_computer.into();
        computer_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        diesel::insert_into(computers::table)
            .values(&computer_db)
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        computer_db.try_into()
    }

    /// Updates a computer's descriptive fields. Holder pointers, state
    /// transitions to Assigned and the lock version are written only by
    /// the assignment service.
    pub fn update(&self, update: ComputerUpdate) -> Result<Computer> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let existing = computers::table
            .find(&update.id)
            .first::<ComputerDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AssetError::NotFound(format!("Computer with id {} not found", update.id))
                }
                _ => AssetError::DatabaseError(e.to_string()),
            })?;

        let state = update
            .state
            .map(|s| s.as_str().to_string())
            .unwrap_or(existing.state);

        diesel::update(computers::table.find(&update.id))
            .set((
                computers::serial_number.eq(&update.serial_number),
                computers::model_id.eq(&update.model_id),
                computers::state.eq(&state),
                computers::cpu.eq(&update.cpu),
                computers::ram.eq(&update.ram),
                computers::storage.eq(&update.storage),
                computers::charger_serial.eq(&update.charger_serial),
                computers::notes.eq(&update.notes),
                computers::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        self.get_by_id(&update.id)
    }

    /// Retrieves a computer by its ID
    pub fn get_by_id(&self, computer_id: &str) -> Result<Computer> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        computers::table
            .find(computer_id)
            .first::<ComputerDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AssetError::NotFound(format!("Computer with id {} not found", computer_id))
                }
                _ => AssetError::DatabaseError(e.to_string()),
            })?
            .try_into()
    }

    /// Lists computers, optionally scoped to one model
    pub fn list(&self, model_identifier: Option<&str>) -> Result<Vec<Computer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = computers::table.into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(computers::model_id.eq(model));
        }

        query
            .order(computers::serial_number.asc())
            .load::<ComputerDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Computer::try_from)
            .collect()
    }

    /// Lists computers whose holder pointers are both null (the fast
    /// availability path)
    pub fn list_available(&self, model_identifier: Option<&str>) -> Result<Vec<Computer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = computers::table
            .filter(computers::assigned_user_id.is_null())
            .filter(computers::assigned_department_id.is_null())
            .into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(computers::model_id.eq(model));
        }

        query
            .order(computers::serial_number.asc())
            .load::<ComputerDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Computer::try_from)
            .collect()
    }

    /// Lists computers currently held by a user or a department
    pub fn list_assigned(&self, model_identifier: Option<&str>) -> Result<Vec<Computer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = computers::table
            .filter(
                computers::assigned_user_id
                    .is_not_null()
                    .or(computers::assigned_department_id.is_not_null()),
            )
            .into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(computers::model_id.eq(model));
        }

        query
            .order(computers::serial_number.asc())
            .load::<ComputerDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Computer::try_from)
            .collect()
    }

    /// Deletes a computer by its ID
    pub fn delete(&self, computer_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(computers::table.find(computer_id))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        if affected == 0 {
            return Err(AssetError::NotFound(format!(
                "Computer with id {} not found",
                computer_id
            )));
        }

        Ok(affected)
    }

    /// Counts computers, optionally only those currently held
    pub fn count(&self, assigned_only: bool) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = computers::table.into_boxed();
        if assigned_only {
            query = query.filter(
                computers::assigned_user_id
                    .is_not_null()
                    .or(computers::assigned_department_id.is_not_null()),
            );
        }

        query
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(AssetError::from)
    }
}

/// Repository for managing peripheral device records
pub struct DeviceRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl DeviceRepository {
    /// Creates a new DeviceRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new device in storage with cleared holder pointers
    pub fn create(&self, new_device: NewDevice) -> Result<Device> {
        new_device.validate()?;

        let mut device_db: DeviceDB = new_device.into();
        device_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        diesel::insert_into(devices::table)
            .values(&device_db)
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        device_db.try_into()
    }

    /// Updates a device's descriptive fields
    pub fn update(&self, update: DeviceUpdate) -> Result<Device> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let existing = devices::table
            .find(&update.id)
            .first::<DeviceDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AssetError::NotFound(format!("Device with id {} not found", update.id))
                }
                _ => AssetError::DatabaseError(e.to_string()),
            })?;

        let state = update
            .state
            .map(|s| s.as_str().to_string())
            .unwrap_or(existing.state);

        diesel::update(devices::table.find(&update.id))
            .set((
                devices::serial_number.eq(&update.serial_number),
                devices::model_id.eq(&update.model_id),
                devices::state.eq(&state),
                devices::notes.eq(&update.notes),
                devices::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        self.get_by_id(&update.id)
    }

    /// Retrieves a device by its ID
    pub fn get_by_id(&self, device_id: &str) -> Result<Device> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        devices::table
            .find(device_id)
            .first::<DeviceDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AssetError::NotFound(format!("Device with id {} not found", device_id))
                }
                _ => AssetError::DatabaseError(e.to_string()),
            })?
            .try_into()
    }

    /// Lists devices, optionally scoped to one model
    pub fn list(&self, model_identifier: Option<&str>) -> Result<Vec<Device>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = devices::table.into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(devices::model_id.eq(model));
        }

        query
            .order(devices::serial_number.asc())
            .load::<DeviceDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Device::try_from)
            .collect()
    }

    /// Lists devices whose holder pointers are both null
    pub fn list_available(&self, model_identifier: Option<&str>) -> Result<Vec<Device>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = devices::table
            .filter(devices::assigned_user_id.is_null())
            .filter(devices::assigned_department_id.is_null())
            .into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(devices::model_id.eq(model));
        }

        query
            .order(devices::serial_number.asc())
            .load::<DeviceDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Device::try_from)
            .collect()
    }

    /// Lists devices currently held by a user or a department
    pub fn list_assigned(&self, model_identifier: Option<&str>) -> Result<Vec<Device>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = devices::table
            .filter(
                devices::assigned_user_id
                    .is_not_null()
                    .or(devices::assigned_department_id.is_not_null()),
            )
            .into_boxed();
        if let Some(model) = model_identifier {
            query = query.filter(devices::model_id.eq(model));
        }

        query
            .order(devices::serial_number.asc())
            .load::<DeviceDB>(&mut conn)
            .map_err(AssetError::from)?
            .into_iter()
            .map(Device::try_from)
            .collect()
    }

    /// Deletes a device by its ID
    pub fn delete(&self, device_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(devices::table.find(device_id))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        if affected == 0 {
            return Err(AssetError::NotFound(format!(
                "Device with id {} not found",
                device_id
            )));
        }

        Ok(affected)
    }

    /// Counts devices, optionally only those currently held
    pub fn count(&self, assigned_only: bool) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = devices::table.into_boxed();
        if assigned_only {
            query = query.filter(
                devices::assigned_user_id
                    .is_not_null()
                    .or(devices::assigned_department_id.is_not_null()),
            );
        }

        query
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(AssetError::from)
    }
}

/// Repository for managing phone line records
pub struct PhoneLineRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PhoneLineRepository {
    /// Creates a new PhoneLineRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new phone line
    pub fn create(&self, new_line: NewPhoneLine) -> Result<PhoneLine> {
        new_line.validate()?;

        let mut line_db: PhoneLineDB = new_line.into();
        line_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        diesel::insert_into(phone_lines::table)
            .values(&line_db)
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        Ok(line_db.into())
    }

    /// Updates a phone line
    pub fn update(&self, update: PhoneLineUpdate) -> Result<PhoneLine> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(phone_lines::table.find(&update.id))
            .set((
                phone_lines::line_number.eq(&update.line_number),
                phone_lines::provider.eq(&update.provider),
                phone_lines::sim_serial.eq(&update.sim_serial),
                phone_lines::plan.eq(&update.plan),
                phone_lines::notes.eq(&update.notes),
                phone_lines::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        if affected == 0 {
            return Err(AssetError::NotFound(format!(
                "Phone line with id {} not found",
                update.id
            )));
        }

        self.get_by_id(&update.id)
    }

    /// Retrieves a phone line by its ID
    pub fn get_by_id(&self, line_id: &str) -> Result<PhoneLine> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        phone_lines::table
            .find(line_id)
            .first::<PhoneLineDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AssetError::NotFound(format!("Phone line with id {} not found", line_id))
                }
                _ => AssetError::DatabaseError(e.to_string()),
            })
            .map(PhoneLine::from)
    }

    /// Lists phone lines, optionally filtered by provider
    pub fn list(&self, provider_filter: Option<&str>) -> Result<Vec<PhoneLine>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let mut query = phone_lines::table.into_boxed();
        if let Some(provider_name) = provider_filter {
            query = query.filter(phone_lines::provider.eq(provider_name));
        }

        query
            .order(phone_lines::line_number.asc())
            .load::<PhoneLineDB>(&mut conn)
            .map_err(AssetError::from)
            .map(|rows| rows.into_iter().map(PhoneLine::from).collect())
    }

    /// Deletes a phone line by its ID
    pub fn delete(&self, line_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(phone_lines::table.find(line_id))
            .execute(&mut conn)
            .map_err(AssetError::from)?;

        if affected == 0 {
            return Err(AssetError::NotFound(format!(
                "Phone line with id {} not found",
                line_id
            )));
        }

        Ok(affected)
    }

    /// Counts phone lines
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        phone_lines::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(AssetError::from)
    }
}
