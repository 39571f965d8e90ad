//! Typed views of controls.

use std::any::{type_name, TypeId};
use std::fmt;

use crate::model::GridControl;
use crate::values::{GridControlValue, GridEditorConfig};

/// Identity of a value or config type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Type info of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without the module path.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

/// Strip the module path from a type name.
///
/// ```
/// use griddata::converters::short_type_name;
///
/// assert_eq!(short_type_name("griddata::values::TextValue"), "TextValue");
/// ```
#[must_use]
pub fn short_type_name(name: &'static str) -> &'static str {
    name.rsplit("::").next().unwrap_or(name)
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Type-erased descriptor pairing a control with its value (and config) type.
///
/// Produced by converters so rendering code can learn which typed view to
/// request without knowing the alias-to-type mapping.
#[derive(Debug, Clone, Copy)]
pub struct GridControlWrapper<'a> {
    control: &'a GridControl,
    value_type: TypeInfo,
    config_type: Option<TypeInfo>,
}

impl<'a> GridControlWrapper<'a> {
    /// Describe `control` as holding a `V`.
    ///
    /// Returns `None` if the control's value is not a `V`.
    #[must_use]
    pub fn of<V: GridControlValue>(control: &'a GridControl) -> Option<Self> {
        control.value().is::<V>().then(|| Self {
            control,
            value_type: TypeInfo::of::<V>(),
            config_type: None,
        })
    }

    /// Describe `control` as holding a `V` configured by a `C`.
    ///
    /// Returns `None` if the control's value is not a `V`. The config itself
    /// may be absent.
    #[must_use]
    pub fn with_config<V: GridControlValue, C: GridEditorConfig>(
        control: &'a GridControl,
    ) -> Option<Self> {
        Self::of::<V>(control).map(|wrapper| Self {
            config_type: Some(TypeInfo::of::<C>()),
            ..wrapper
        })
    }

    #[must_use]
    pub fn control(&self) -> &'a GridControl {
        self.control
    }

    #[must_use]
    pub fn value_type(&self) -> TypeInfo {
        self.value_type
    }

    #[must_use]
    pub fn config_type(&self) -> Option<TypeInfo> {
        self.config_type
    }

    /// Typed view, if `V` is the described value type.
    #[must_use]
    pub fn typed<V: GridControlValue>(&self) -> Option<TypedControl<'a, V, NoConfig>> {
        if self.value_type.id() != TypeId::of::<V>() {
            return None;
        }
        self.control.wrapper::<V>()
    }

    /// Typed view with config, if `V` and `C` are the described types.
    #[must_use]
    pub fn typed_with_config<V: GridControlValue, C: GridEditorConfig>(
        &self,
    ) -> Option<TypedControl<'a, V, C>> {
        if self.value_type.id() != TypeId::of::<V>()
            || self.config_type.map(|t| t.id()) != Some(TypeId::of::<C>())
        {
            return None;
        }
        self.control.wrapper_with_config::<V, C>()
    }
}

/// Config type of wrappers that have no config. Cannot be instantiated.
#[derive(Debug)]
pub enum NoConfig {}

/// Statically typed view of a control.
#[derive(Debug)]
pub struct TypedControl<'a, V, C = NoConfig> {
    pub control: &'a GridControl,
    pub value: &'a V,
    pub config: Option<&'a C>,
}

impl<V, C> Clone for TypedControl<'_, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, C> Copy for TypedControl<'_, V, C> {}
