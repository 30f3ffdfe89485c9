//! # Employee Repository
//!
//! Plain CRUD for employee records. No validation happens here; form-level
//! coercion is the caller's job and malformed values surface as storage
//! errors.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopledger_core::{Employee, NewEmployee};

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Lists all employees ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, gender, birth_date, position, salary_cents,
                   address, contact, hired_date, photo, stopped
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Gets an employee by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, gender, birth_date, position, salary_cents,
                   address, contact, hired_date, photo, stopped
            FROM employees
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Inserts an employee and returns the generated id.
    pub async fn insert(&self, employee: &NewEmployee) -> DbResult<i64> {
        debug!(name = %employee.name, "inserting employee");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO employees
                (name, gender, birth_date, position, salary_cents,
                 address, contact, hired_date, photo, stopped)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING id
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.gender)
        .bind(employee.birth_date)
        .bind(&employee.position)
        .bind(employee.salary_cents)
        .bind(&employee.address)
        .bind(&employee.contact)
        .bind(employee.hired_date)
        .bind(&employee.photo)
        .bind(employee.stopped)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Updates an employee in place.
    pub async fn update(&self, id: i64, employee: &NewEmployee) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                name = ?2, gender = ?3, birth_date = ?4, position = ?5,
                salary_cents = ?6, address = ?7, contact = ?8,
                hired_date = ?9, photo = ?10, stopped = ?11
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&employee.name)
        .bind(&employee.gender)
        .bind(employee.birth_date)
        .bind(&employee.position)
        .bind(employee.salary_cents)
        .bind(&employee.address)
        .bind(&employee.contact)
        .bind(employee.hired_date)
        .bind(&employee.photo)
        .bind(employee.stopped)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(())
    }

    /// Deletes an employee.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    fn sample() -> NewEmployee {
        NewEmployee {
            name: "Dara Chan".to_string(),
            gender: Some("F".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 12),
            position: Some("Cashier".to_string()),
            salary_cents: 45_000_00,
            address: Some("12 River Rd".to_string()),
            contact: Some("555-0101".to_string()),
            hired_date: NaiveDate::from_ymd_opt(2023, 1, 9),
            photo: None,
            stopped: false,
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.employees();

        let id = repo.insert(&sample()).await.unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Dara Chan");
        assert_eq!(fetched.salary_cents, 45_000_00);
        assert!(!fetched.stopped);

        let mut updated = sample();
        updated.position = Some("Manager".to_string());
        updated.stopped = true;
        repo.update(id, &updated).await.unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.position.as_deref(), Some("Manager"));
        assert!(fetched.stopped);

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_employee_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.employees().update(999, &sample()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_orders_by_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.employees();

        let mut second = sample();
        second.name = "Bora Kim".to_string();

        let first_id = repo.insert(&sample()).await.unwrap();
        let second_id = repo.insert(&second).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first_id);
        assert_eq!(all[1].id, second_id);
    }
}
