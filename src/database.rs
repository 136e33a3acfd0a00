//! Gestion des bases de données pour les formulaires et leurs réponses.

use std::{
    collections::HashMap,
    fs::{create_dir_all, File},
    path::Path,
    sync::RwLock,
};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{self, to_writer};
use crate::consts;

// Gestion des formulaires
pub mod form {
    use super::*;
    use once_cell::sync::Lazy;
    use uuid::Uuid;
    use crate::models::Form;

    type Db = HashMap<Uuid, Form>;
    static DB: Lazy<RwLock<Db>> = Lazy::new(Default::default);

    pub fn create(form: Form) -> Result<Form> {
        let mut db = DB.write().or(Err(anyhow!("DB poisoned")))?;

        if db.contains_key(&form.id) {
            return Err(anyhow!("Form already exists"));
        }

        db.insert(form.id, form.clone());
        save(&db)?;
        Ok(form)
    }

    pub fn get(id: &Uuid) -> Option<Form> {
        DB.read().ok()?.get(id).cloned()
    }

    pub fn get_all() -> Result<Vec<Form>> {
        let db = DB.read().or(Err(anyhow!("DB poisoned")))?;
        Ok(db.values().cloned().collect())
    }

    pub fn update(id: &Uuid, form: Form) -> Result<Option<Form>> {
        let mut db = DB.write().or(Err(anyhow!("DB poisoned")))?;

        if !db.contains_key(id) {
            return Ok(None);
        }

        db.insert(*id, form.clone());
        save(&db)?;
        Ok(Some(form))
    }

    /// Supprime un formulaire et, en cascade, ses réponses enregistrées.
    pub fn delete(id: &Uuid) -> Result<bool> {
        let mut db = DB.write().or(Err(anyhow!("DB poisoned")))?;

        if db.remove(id).is_none() {
            return Ok(false);
        }

        save(&db)?;
        drop(db);

        super::response::remove_for_form(id)?;
        Ok(true)
    }

    pub fn load() -> Result<()> {
        super::load(&DB, consts::FORMS_DB_PATH)
    }

    fn save(db: &Db) -> Result<()> {
        super::save(db, consts::FORMS_DB_PATH)
    }
}

// Gestion des réponses soumises
pub mod response {
    use super::*;
    use chrono::Utc;
    use once_cell::sync::Lazy;
    use uuid::Uuid;
    use crate::models::{AnswerValue, FormResponse};

    type Db = HashMap<Uuid, Vec<FormResponse>>;
    static DB: Lazy<RwLock<Db>> = Lazy::new(Default::default);

    /// Enregistre un ensemble de réponses déjà validées pour un formulaire.
    pub fn add(form_id: Uuid, answers: HashMap<String, AnswerValue>) -> Result<FormResponse> {
        let response = FormResponse {
            id: Uuid::new_v4(),
            form_id,
            answers,
            submitted_at: Utc::now(),
        };

        let mut db = DB.write().or(Err(anyhow!("DB poisoned")))?;
        db.entry(form_id).or_default().push(response.clone());
        save(&db)?;
        Ok(response)
    }

    pub fn get_for_form(form_id: &Uuid) -> Vec<FormResponse> {
        DB.read()
            .ok()
            .and_then(|db| db.get(form_id).cloned())
            .unwrap_or_default()
    }

    pub fn remove_for_form(form_id: &Uuid) -> Result<()> {
        let mut db = DB.write().or(Err(anyhow!("DB poisoned")))?;

        if db.remove(form_id).is_some() {
            save(&db)?;
        }
        Ok(())
    }

    pub fn load() -> Result<()> {
        super::load(&DB, consts::RESPONSES_DB_PATH)
    }

    fn save(db: &Db) -> Result<()> {
        super::save(db, consts::RESPONSES_DB_PATH)
    }
}

/// Fonctions de sauvegarde et chargement YAML
fn save<T: Serialize>(db: &T, path: &str) -> Result<()> {
    let path_obj = Path::new(path);

    // Crée le dossier parent s'il n'existe pas
    if let Some(parent_dir) = path_obj.parent() {
        if !parent_dir.exists() {
            create_dir_all(parent_dir).or(Err(anyhow!("Failed to create directory")))?;
        }
    }

    let file = File::create(path_obj)?;
    to_writer(file, db).or(Err(anyhow!("Failed to serialize DB")))?;
    Ok(())
}

fn load<T: for<'de> Deserialize<'de> + Default>(db: &RwLock<T>, path: &str) -> Result<()> {
    // Chargement de la base de données depuis le fichier YAML
    if let Ok(file) = File::open(path) {
        let db_content: T = serde_yaml::from_reader(file).unwrap_or_default();
        let mut db = db.write().or(Err(anyhow!("DB poisoned")))?;
        *db = db_content;
    } else {
        let mut db = db.write().or(Err(anyhow!("DB poisoned")))?;
        *db = T::default();
    }
    Ok(())
}
