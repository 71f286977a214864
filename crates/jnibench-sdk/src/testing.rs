//! In-memory `HostEnv` for unit tests
//!
//! Classes, objects and `long[]` arrays live in plain vectors and handles are
//! indices into them. Lookup and region calls are counted so tests can check
//! what the caching layer does.

use crate::error::{HostError, HostResult};
use crate::host::HostEnv;

/// Class handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockClass(usize);

/// Object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockObject(usize);

/// Array handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockArray(usize);

/// Instance field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockField {
    class: usize,
    slot: usize,
}

/// Static field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockStaticField {
    class: usize,
    slot: usize,
}

#[derive(Debug, Clone)]
struct ClassDef {
    name: String,
    fields: Vec<(String, String)>,
    statics: Vec<(String, String)>,
    static_values: Vec<i64>,
}

#[derive(Debug, Clone)]
struct ObjectData {
    class: usize,
    values: Vec<i64>,
}

/// Heap-backed host
#[derive(Debug, Clone, Default)]
pub struct HeapHost {
    classes: Vec<ClassDef>,
    objects: Vec<ObjectData>,
    arrays: Vec<Vec<i64>>,
    class_lookups: usize,
    field_lookups: usize,
    static_field_lookups: usize,
    region_calls: usize,
}

impl HeapHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class with `(name, descriptor)` instance and static fields.
    pub fn define_class(&mut self, name: &str, fields: &[(&str, &str)], statics: &[(&str, &str)]) {
        self.classes.push(ClassDef {
            name: name.to_string(),
            fields: owned_pairs(fields),
            statics: owned_pairs(statics),
            static_values: vec![0; statics.len()],
        });
    }

    /// Allocate a zeroed instance of a declared class.
    pub fn new_object(&mut self, class: &str) -> MockObject {
        let class = self
            .class_index(class)
            .unwrap_or_else(|| panic!("class {class} not declared"));
        let slots = self.classes[class].fields.len();
        self.objects.push(ObjectData {
            class,
            values: vec![0; slots],
        });
        MockObject(self.objects.len() - 1)
    }

    pub fn new_long_array(&mut self, items: &[i64]) -> MockArray {
        self.arrays.push(items.to_vec());
        MockArray(self.arrays.len() - 1)
    }

    pub fn long_array(&self, array: &MockArray) -> Vec<i64> {
        self.arrays[array.0].clone()
    }

    /// Read back an instance field by name.
    pub fn long_field(&self, object: &MockObject, name: &str) -> i64 {
        let data = &self.objects[object.0];
        let slot = self.classes[data.class]
            .fields
            .iter()
            .position(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("no field {name}"));
        data.values[slot]
    }

    /// Read back a static field by name.
    pub fn static_long_field(&self, class: &MockClass, name: &str) -> i64 {
        let def = &self.classes[class.0];
        let slot = def
            .statics
            .iter()
            .position(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("no static field {name}"));
        def.static_values[slot]
    }

    pub fn class_lookups(&self) -> usize {
        self.class_lookups
    }

    pub fn field_lookups(&self) -> usize {
        self.field_lookups
    }

    pub fn static_field_lookups(&self) -> usize {
        self.static_field_lookups
    }

    pub fn region_calls(&self) -> usize {
        self.region_calls
    }

    fn class_index(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    fn region_bounds(&self, array: &MockArray, start: usize, len: usize) -> HostResult<()> {
        let size = self.arrays[array.0].len();
        match start.checked_add(len) {
            Some(end) if end <= size => Ok(()),
            _ => Err(HostError::Accessor(format!(
                "ArrayIndexOutOfBoundsException: {start}+{len} > {size}"
            ))),
        }
    }
}

fn owned_pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|(n, d)| (n.to_string(), d.to_string()))
        .collect()
}

impl HostEnv for HeapHost {
    type Class = MockClass;
    type Object = MockObject;
    type LongArray = MockArray;
    type FieldId = MockField;
    type StaticFieldId = MockStaticField;

    fn find_class(&mut self, name: &str) -> HostResult<MockClass> {
        self.class_lookups += 1;
        self.class_index(name)
            .map(MockClass)
            .ok_or_else(|| HostError::ClassNotFound {
                class: name.to_string(),
            })
    }

    fn field_id(&mut self, class: &MockClass, name: &str, descriptor: &str) -> HostResult<MockField> {
        self.field_lookups += 1;
        let def = &self.classes[class.0];
        def.fields
            .iter()
            .position(|(n, d)| n == name && d == descriptor)
            .map(|slot| MockField {
                class: class.0,
                slot,
            })
            .ok_or_else(|| HostError::FieldNotFound {
                class: def.name.clone(),
                name: name.to_string(),
                descriptor: descriptor.to_string(),
            })
    }

    fn static_field_id(
        &mut self,
        class: &MockClass,
        name: &str,
        descriptor: &str,
    ) -> HostResult<MockStaticField> {
        self.static_field_lookups += 1;
        let def = &self.classes[class.0];
        def.statics
            .iter()
            .position(|(n, d)| n == name && d == descriptor)
            .map(|slot| MockStaticField {
                class: class.0,
                slot,
            })
            .ok_or_else(|| HostError::StaticFieldNotFound {
                class: def.name.clone(),
                name: name.to_string(),
                descriptor: descriptor.to_string(),
            })
    }

    fn set_long_field(&mut self, object: &MockObject, field: MockField, value: i64) -> HostResult<()> {
        let data = &mut self.objects[object.0];
        if data.class != field.class {
            return Err(HostError::Accessor("field does not belong to object".into()));
        }
        data.values[field.slot] = value;
        Ok(())
    }

    fn set_static_long_field(
        &mut self,
        class: &MockClass,
        field: MockStaticField,
        value: i64,
    ) -> HostResult<()> {
        if class.0 != field.class {
            return Err(HostError::Accessor("field does not belong to class".into()));
        }
        self.classes[class.0].static_values[field.slot] = value;
        Ok(())
    }

    fn long_array_length(&mut self, array: &MockArray) -> HostResult<usize> {
        Ok(self.arrays[array.0].len())
    }

    fn get_long_array_region(
        &mut self,
        array: &MockArray,
        start: usize,
        buf: &mut [i64],
    ) -> HostResult<()> {
        self.region_calls += 1;
        self.region_bounds(array, start, buf.len())?;
        buf.copy_from_slice(&self.arrays[array.0][start..start + buf.len()]);
        Ok(())
    }

    fn set_long_array_region(&mut self, array: &MockArray, start: usize, buf: &[i64]) -> HostResult<()> {
        self.region_calls += 1;
        self.region_bounds(array, start, buf.len())?;
        self.arrays[array.0][start..start + buf.len()].copy_from_slice(buf);
        Ok(())
    }
}
