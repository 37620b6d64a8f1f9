//! Scheduling coordinator implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use cm_shared::utils::validation;

use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::identity::Role;
use crate::domain::entities::prescription::Prescription;
use crate::domain::entities::slot::{Slot, SlotHold};
use crate::errors::{AuthError, DomainError, DomainResult, ScheduleError};
use crate::repositories::{
    AppointmentRepository, CredentialStore, PrescriptionRepository, SlotRepository,
};
use crate::services::auth::AuthService;
use crate::services::availability::AvailabilityLedger;

/// Coordinator for the booking, cancellation, and prescription flows
///
/// Every mutating operation starts with an authorization check and an
/// ownership check against the token's subject; the role alone is never
/// enough to act on someone else's appointment.
pub struct SchedulingService<C, S, A, P>
where
    C: CredentialStore,
    S: SlotRepository,
    A: AppointmentRepository,
    P: PrescriptionRepository,
{
    /// Authorization service for token validation
    auth: Arc<AuthService<C>>,
    /// Ledger owning slot state
    ledger: Arc<AvailabilityLedger<S>>,
    /// Appointment store
    appointments: Arc<A>,
    /// Prescription store
    prescriptions: Arc<P>,
}

impl<C, S, A, P> SchedulingService<C, S, A, P>
where
    C: CredentialStore,
    S: SlotRepository,
    A: AppointmentRepository,
    P: PrescriptionRepository,
{
    /// Create a new scheduling coordinator
    pub fn new(
        auth: Arc<AuthService<C>>,
        ledger: Arc<AvailabilityLedger<S>>,
        appointments: Arc<A>,
        prescriptions: Arc<P>,
    ) -> Self {
        Self {
            auth,
            ledger,
            appointments,
            prescriptions,
        }
    }

    /// List a doctor's free slots starting at or after `from`
    ///
    /// Open to unauthenticated callers; patients browse availability
    /// before logging in.
    pub async fn list_free(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
    ) -> DomainResult<Vec<Slot>> {
        self.ledger.list_free(doctor_id, from).await
    }

    /// Book a slot for a patient
    ///
    /// Requires a Patient token whose subject is `patient_id`. The slot is
    /// reserved with a hold, the appointment record is created, and the
    /// hold is committed into a booking. Any failure after the hold rolls
    /// the reservation back before propagating, so no failure path leaves
    /// the slot stuck.
    pub async fn book(
        &self,
        token: &str,
        patient_id: Uuid,
        doctor_id: Uuid,
        slot_time: DateTime<Utc>,
    ) -> DomainResult<Appointment> {
        let subject = self.auth.authorize(token, Role::Patient)?;
        if subject != patient_id {
            warn!(%patient_id, "booking attempted for another patient");
            return Err(AuthError::Forbidden {
                required: Role::Patient,
            }
            .into());
        }

        let hold = self.ledger.hold(doctor_id, slot_time).await?;

        let appointment = match self
            .appointments
            .create(Appointment::new(doctor_id, patient_id, slot_time))
            .await
        {
            Ok(appointment) => appointment,
            Err(err) => {
                self.roll_back_hold(&hold).await;
                return Err(err);
            }
        };

        if let Err(err) = self.ledger.commit(&hold).await {
            // The record is stillborn; remove it and free our hold if we
            // still own it
            if let Err(delete_err) = self.appointments.delete(appointment.id).await {
                warn!(appointment_id = %appointment.id, %delete_err, "rollback delete failed");
            }
            self.roll_back_hold(&hold).await;
            return Err(err);
        }

        info!(appointment_id = %appointment.id, %doctor_id, "appointment booked");
        Ok(appointment)
    }

    /// Cancel an appointment and reopen its slot
    ///
    /// Allowed for the owning Patient, the assigned Doctor, or an Admin.
    /// Cancelling an already-cancelled appointment succeeds without
    /// touching the slot, so a re-cancel can never free a slot that was
    /// rebooked in the meantime.
    pub async fn cancel(&self, token: &str, appointment_id: Uuid) -> DomainResult<Appointment> {
        let (subject, role) = self
            .auth
            .authorize_any(token, &[Role::Admin, Role::Doctor, Role::Patient])?;

        let mut appointment = self.find_appointment(appointment_id).await?;
        self.check_party(&appointment, subject, role)?;

        if appointment.is_cancelled() {
            return Ok(appointment);
        }

        appointment.cancel()?;
        let appointment = self.appointments.update(appointment).await?;
        self.ledger
            .release(appointment.doctor_id, appointment.slot_time)
            .await?;

        info!(%appointment_id, %role, "appointment cancelled");
        Ok(appointment)
    }

    /// Mark an appointment completed after the visit
    ///
    /// Assigned Doctor only; the slot stays consumed.
    pub async fn complete(&self, token: &str, appointment_id: Uuid) -> DomainResult<Appointment> {
        let subject = self.auth.authorize(token, Role::Doctor)?;

        let mut appointment = self.find_appointment(appointment_id).await?;
        if appointment.doctor_id != subject {
            return Err(AuthError::Forbidden {
                required: Role::Doctor,
            }
            .into());
        }

        appointment.complete()?;
        let appointment = self.appointments.update(appointment).await?;

        info!(%appointment_id, "appointment completed");
        Ok(appointment)
    }

    /// Attach a prescription to an appointment
    ///
    /// Assigned Doctor only, during or after the visit; at most one
    /// prescription per appointment.
    pub async fn attach_prescription(
        &self,
        token: &str,
        appointment_id: Uuid,
        content: &str,
    ) -> DomainResult<Prescription> {
        let subject = self.auth.authorize(token, Role::Doctor)?;

        let appointment = self.find_appointment(appointment_id).await?;
        if appointment.doctor_id != subject {
            return Err(AuthError::Forbidden {
                required: Role::Doctor,
            }
            .into());
        }

        if !appointment.accepts_prescription() {
            return Err(ScheduleError::AppointmentNotCompletable {
                status: appointment.status,
            }
            .into());
        }

        if !validation::not_empty(content) {
            return Err(DomainError::Validation {
                message: "Prescription content must not be empty".to_string(),
            });
        }

        let prescription = self
            .prescriptions
            .create(Prescription::new(appointment_id, content.to_string()))
            .await?;

        info!(%appointment_id, "prescription attached");
        Ok(prescription)
    }

    /// Read the prescription attached to an appointment
    ///
    /// Assigned Doctor only.
    pub async fn prescription_for(
        &self,
        token: &str,
        appointment_id: Uuid,
    ) -> DomainResult<Prescription> {
        let subject = self.auth.authorize(token, Role::Doctor)?;

        let appointment = self.find_appointment(appointment_id).await?;
        if appointment.doctor_id != subject {
            return Err(AuthError::Forbidden {
                required: Role::Doctor,
            }
            .into());
        }

        self.prescriptions
            .find_by_appointment(appointment_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "prescription".to_string(),
            })
    }

    /// List a doctor's appointments; the doctor themselves or an Admin
    pub async fn appointments_for_doctor(
        &self,
        token: &str,
        doctor_id: Uuid,
    ) -> DomainResult<Vec<Appointment>> {
        let (subject, role) = self.auth.authorize_any(token, &[Role::Admin, Role::Doctor])?;
        if role == Role::Doctor && subject != doctor_id {
            return Err(AuthError::Forbidden {
                required: Role::Doctor,
            }
            .into());
        }
        self.appointments.find_by_doctor(doctor_id).await
    }

    /// List a patient's appointments; the patient themselves or an Admin
    pub async fn appointments_for_patient(
        &self,
        token: &str,
        patient_id: Uuid,
    ) -> DomainResult<Vec<Appointment>> {
        let (subject, role) = self
            .auth
            .authorize_any(token, &[Role::Admin, Role::Patient])?;
        if role == Role::Patient && subject != patient_id {
            return Err(AuthError::Forbidden {
                required: Role::Patient,
            }
            .into());
        }
        self.appointments.find_by_patient(patient_id).await
    }

    /// Best-effort rollback; the original failure is what the caller sees
    async fn roll_back_hold(&self, hold: &SlotHold) {
        if let Err(err) = self.ledger.release_hold(hold).await {
            warn!(doctor_id = %hold.doctor_id, %err, "rollback release failed");
        }
    }

    async fn find_appointment(&self, appointment_id: Uuid) -> DomainResult<Appointment> {
        self.appointments
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| ScheduleError::NotFound.into())
    }

    /// Ownership check for cancellation: the role gets a caller to the
    /// door, the subject must also be a party to the appointment
    fn check_party(
        &self,
        appointment: &Appointment,
        subject: Uuid,
        role: Role,
    ) -> DomainResult<()> {
        let allowed = match role {
            Role::Admin => true,
            Role::Doctor => appointment.doctor_id == subject,
            Role::Patient => appointment.patient_id == subject,
        };
        if !allowed {
            warn!(appointment_id = %appointment.id, %role, "caller is not a party to the appointment");
            return Err(AuthError::Forbidden { required: role }.into());
        }
        Ok(())
    }
}
