//! JSON codec for courses and platforms
//!
//! Course documents carry a `type` discriminator naming the concrete kind.
//! Decoding dispatches on it through a [`CourseRegistry`] and rebuilds the
//! course through [`Course::new`], so date ordering is re-checked on load.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "name": "...",
//!   "address": {"domain": "...", "url": "..."},
//!   "courses": [
//!     {"type": "ProgrammingCourse", "title": "...", "start_date": "2024-01-01",
//!      "end_date": "2024-03-01", "instructor": "...", "students": [], "topics": [],
//!      "languages": []}
//!   ]
//! }
//! ```

use crate::address::Address;
use crate::course::{Course, CourseSpec};
use crate::error::CatalogError;
use crate::notifier::{NoopNotifier, Notifier};
use crate::platform::Platform;
use crate::registry::CourseRegistry;
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Serialized course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDocument {
    /// Discriminator (`ProgrammingCourse`, `DesignCourse`, `ScienceCourse`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    /// Course title
    pub title: String,
    /// First day (`YYYY-MM-DD`)
    pub start_date: NaiveDate,
    /// Last day (`YYYY-MM-DD`)
    pub end_date: NaiveDate,
    /// Teaching instructor
    pub instructor: String,
    /// Enrolled students
    #[serde(default)]
    pub students: Vec<String>,
    /// Topics
    #[serde(default)]
    pub topics: Vec<String>,
    /// Kind-specific keys (`languages`, `tools` or `field`)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Serialized platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDocument {
    /// Platform name
    pub name: String,
    /// Platform address
    pub address: Address,
    /// Courses in platform order
    #[serde(default)]
    pub courses: Vec<CourseDocument>,
}

/// Platform document with courses left undecoded
#[derive(Deserialize)]
struct RawPlatform {
    name: String,
    address: Address,
    #[serde(default)]
    courses: Vec<Value>,
}

fn assemble_platform(name: String, address: Address, courses: Vec<Course>) -> Platform {
    let mut platform = Platform::new(name, address);
    for course in courses {
        platform.push_loaded(course);
    }
    platform
}

/// Any document [`CatalogCodec::decode_any`] recognises
#[derive(Debug)]
pub enum Decoded {
    /// Object with a `type` key
    Course(Course),
    /// Array of course objects
    Courses(Vec<Course>),
    /// Object with `name` and `address`
    Platform(Platform),
    /// Object with `domain` and `url`
    Address(Address),
}

impl Course {
    /// Encode to a course document
    #[must_use]
    pub fn to_document(&self) -> CourseDocument {
        let kind = self.kind();
        let mut details = Map::new();
        details.insert(
            kind.detail_field().to_string(),
            Value::from(kind.details().to_vec()),
        );
        CourseDocument {
            course_type: Some(kind.type_name().to_string()),
            title: self.title().to_string(),
            start_date: self.start_date(),
            end_date: self.end_date(),
            instructor: self.instructor().to_string(),
            students: self.students().to_vec(),
            topics: self.topics().to_vec(),
            details,
        }
    }
}

impl Platform {
    /// Encode to a platform document
    #[must_use]
    pub fn to_document(&self) -> PlatformDocument {
        PlatformDocument {
            name: self.name().to_string(),
            address: self.address().clone(),
            courses: self.courses().iter().map(Course::to_document).collect(),
        }
    }

    /// Write the platform as JSON to `path`
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        CatalogCodec::new().save(self, path, true)
    }

    /// Read a platform from the JSON file at `path`
    ///
    /// # Errors
    /// - [`CatalogError::Io`] if the file cannot be read
    /// - [`CatalogError::Codec`] for malformed JSON
    /// - [`CatalogError::UnknownCourseType`] for an unregistered discriminator
    /// - [`CatalogError::InvalidDate`] if a course's dates are out of order
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        CatalogCodec::new().load(path)
    }
}

/// Encoder/decoder bound to a registry and a notifier for decoded courses
#[derive(Debug, Clone)]
pub struct CatalogCodec {
    registry: CourseRegistry,
    notifier: Arc<dyn Notifier>,
}

impl Default for CatalogCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCodec {
    /// Codec with the built-in course kinds and no notifications
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: CourseRegistry::with_defaults(),
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Use a custom registry
    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: CourseRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Attach `notifier` to every decoded course
    #[inline]
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Registry in use
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    /// Rebuild a course from its document
    ///
    /// # Errors
    /// See [`decode_course_value`](Self::decode_course_value).
    pub fn decode_course(&self, doc: CourseDocument) -> Result<Course, CatalogError> {
        self.decode_course_value(serde_json::to_value(doc)?)
    }

    /// Rebuild a course from a raw JSON object
    ///
    /// The `type` discriminator is resolved before any other field is read.
    ///
    /// # Errors
    /// - [`CatalogError::UnknownCourseType`] if `type` is absent, not a
    ///   string, or unregistered
    /// - [`CatalogError::Codec`] if the value is not an object, or a base
    ///   field or the variant list is missing or malformed
    /// - [`CatalogError::InvalidDate`] if `end_date < start_date`
    pub fn decode_course_value(&self, value: Value) -> Result<Course, CatalogError> {
        let Value::Object(mut fields) = value else {
            return Err(serde_json::Error::custom("course document must be a JSON object").into());
        };
        let type_name = match fields.remove("type") {
            Some(Value::String(name)) => name,
            Some(other) => return Err(CatalogError::UnknownCourseType(Some(other.to_string()))),
            None => return Err(CatalogError::UnknownCourseType(None)),
        };
        let entry = self
            .registry
            .get(&type_name)
            .ok_or_else(|| CatalogError::UnknownCourseType(Some(type_name.clone())))?;

        let raw = fields
            .remove(entry.detail_field)
            .ok_or_else(|| serde_json::Error::missing_field(entry.detail_field))?;
        let details: Vec<String> = serde_json::from_value(raw)?;
        let doc: CourseDocument = serde_json::from_value(Value::Object(fields))?;

        let spec = CourseSpec {
            title: doc.title,
            start_date: doc.start_date,
            end_date: doc.end_date,
            instructor: doc.instructor,
            students: doc.students,
            topics: doc.topics,
        };
        let course = Course::new(spec, (entry.build)(details))?;
        Ok(course.with_notifier(Arc::clone(&self.notifier)))
    }

    /// Rebuild a platform, keeping course order
    ///
    /// # Errors
    /// Fails on the first course that cannot be decoded; no partial platform
    /// is returned.
    pub fn decode_platform(&self, doc: PlatformDocument) -> Result<Platform, CatalogError> {
        let courses = doc
            .courses
            .into_iter()
            .map(|c| self.decode_course(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(assemble_platform(doc.name, doc.address, courses))
    }

    fn decode_platform_value(&self, value: Value) -> Result<Platform, CatalogError> {
        let raw: RawPlatform = serde_json::from_value(value)?;
        let courses = self.decode_course_list(raw.courses)?;
        Ok(assemble_platform(raw.name, raw.address, courses))
    }

    fn decode_course_list(&self, values: Vec<Value>) -> Result<Vec<Course>, CatalogError> {
        values
            .into_iter()
            .map(|v| self.decode_course_value(v))
            .collect()
    }

    /// Course as pretty JSON
    ///
    /// # Errors
    /// Returns [`CatalogError::Codec`] if serialization fails.
    pub fn course_to_json(course: &Course) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&course.to_document())?)
    }

    /// Course from JSON text
    ///
    /// # Errors
    /// See [`decode_course`](Self::decode_course); malformed JSON yields
    /// [`CatalogError::Codec`].
    pub fn course_from_json(&self, json: &str) -> Result<Course, CatalogError> {
        self.decode_course_value(serde_json::from_str(json)?)
    }

    /// Course list as pretty JSON array
    ///
    /// # Errors
    /// Returns [`CatalogError::Codec`] if serialization fails.
    pub fn courses_to_json(courses: &[Course]) -> Result<String, CatalogError> {
        let docs: Vec<CourseDocument> = courses.iter().map(Course::to_document).collect();
        Ok(serde_json::to_string_pretty(&docs)?)
    }

    /// Course list from a JSON array
    ///
    /// # Errors
    /// See [`decode_course`](Self::decode_course).
    pub fn courses_from_json(&self, json: &str) -> Result<Vec<Course>, CatalogError> {
        self.decode_course_list(serde_json::from_str(json)?)
    }

    /// Platform as JSON
    ///
    /// # Errors
    /// Returns [`CatalogError::Codec`] if serialization fails.
    pub fn platform_to_json(platform: &Platform, pretty: bool) -> Result<String, CatalogError> {
        let doc = platform.to_document();
        let json = if pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(json)
    }

    /// Platform from JSON text
    ///
    /// # Errors
    /// See [`decode_platform`](Self::decode_platform).
    pub fn platform_from_json(&self, json: &str) -> Result<Platform, CatalogError> {
        self.decode_platform_value(serde_json::from_str(json)?)
    }

    /// Decode a document by its shape
    ///
    /// A course is recognised by its `type` key, a platform by `name` and
    /// `address`, an address by `domain` and `url`; an array is read as a
    /// course list.
    ///
    /// # Errors
    /// [`CatalogError::Codec`] for JSON of any other shape, plus the errors
    /// of the matching decoder.
    pub fn decode_any(&self, json: &str) -> Result<Decoded, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        let has = |key: &str| value.get(key).is_some();
        let is_course = has("type");
        let is_platform = has("name") && has("address");
        let is_address = has("domain") && has("url");

        if let Value::Array(values) = value {
            Ok(Decoded::Courses(self.decode_course_list(values)?))
        } else if is_course {
            Ok(Decoded::Course(self.decode_course_value(value)?))
        } else if is_platform {
            Ok(Decoded::Platform(self.decode_platform_value(value)?))
        } else if is_address {
            Ok(Decoded::Address(serde_json::from_value(value)?))
        } else {
            Err(serde_json::Error::custom("unrecognised catalog document").into())
        }
    }

    /// Write `platform` to `path`
    ///
    /// The file handle is closed on every exit path. The write is not
    /// atomic: a failure part-way can leave a truncated file.
    ///
    /// # Errors
    /// - [`CatalogError::Codec`] if serialization fails
    /// - [`CatalogError::Io`] if the file cannot be written
    pub fn save(
        &self,
        platform: &Platform,
        path: impl AsRef<Path>,
        pretty: bool,
    ) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let json = Self::platform_to_json(platform, pretty)?;
        fs::write(path, json).map_err(|e| CatalogError::io_error(path, e))?;
        tracing::info!(
            platform = platform.name(),
            path = %path.display(),
            courses = platform.len(),
            "platform saved"
        );
        Ok(())
    }

    /// Read a platform from `path`
    ///
    /// # Errors
    /// - [`CatalogError::Io`] if the file cannot be read
    /// - decoding errors as for [`platform_from_json`](Self::platform_from_json)
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Platform, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        let platform = self.platform_from_json(&json)?;
        tracing::info!(
            platform = platform.name(),
            path = %path.display(),
            courses = platform.len(),
            "platform loaded"
        );
        Ok(platform)
    }
}
