use chrono::NaiveDate;
use mockall::mock;

use crate::models::{DbAppointment, DbService, DbWorkingHours};

// Mock repositories for testing
mock! {
    pub ServiceRepo {
        pub async fn list_active_services(&self) -> eyre::Result<Vec<DbService>>;

        pub async fn get_service_by_id(
            &self,
            id: i64,
        ) -> eyre::Result<Option<DbService>>;
    }
}

mock! {
    pub WorkingHoursRepo {
        pub async fn get_working_hours_by_weekday(
            &self,
            dentist_id: i64,
            weekday: i16,
        ) -> eyre::Result<Vec<DbWorkingHours>>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn get_active_appointments_by_date(
            &self,
            dentist_id: i64,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;
    }
}
